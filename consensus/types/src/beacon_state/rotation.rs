//! Rotation of the shard assigned to the first committee of each slot.
//!
//! Only the start shard of the current epoch is stored. Any other slot is reached by replaying
//! the committee count of every slot in between.

use super::{BeaconState, Error};
use crate::shard_topology::{
    active_shard_count, compute_committee_index_from_shard, compute_shard_from_committee_index,
};
use crate::{ChainSpec, Epoch, EthSpec, Slot};
use safe_arith::SafeArith;

impl<E: EthSpec> BeaconState<E> {
    /// Return the shard assigned to committee `0` at `slot`.
    pub fn get_start_shard(&self, slot: Slot, spec: &ChainSpec) -> Result<u64, Error> {
        let active_shards = active_shard_count(spec);
        let current_epoch_start_slot = self.current_epoch().start_slot(E::slots_per_epoch());
        let mut shard = self.current_epoch_start_shard;

        // Committee counts only change across epochs, so memoize the last one.
        let mut cached: Option<(Epoch, u64)> = None;
        let mut committee_count_at = |slot: Slot| -> Result<u64, Error> {
            let epoch = slot.epoch(E::slots_per_epoch());
            match cached {
                Some((cached_epoch, count)) if cached_epoch == epoch => Ok(count),
                _ => {
                    let count = self.get_committee_count_per_slot(epoch, spec)?;
                    cached = Some((epoch, count));
                    Ok(count)
                }
            }
        };

        if slot > current_epoch_start_slot {
            let mut s = current_epoch_start_slot;
            while s < slot {
                let delta = committee_count_at(s)?;
                shard = shard.safe_add(delta)?.safe_rem(active_shards)?;
                s.safe_add_assign(1)?;
            }
        } else if slot < current_epoch_start_slot {
            let mut s = current_epoch_start_slot;
            while s > slot {
                s.safe_sub_assign(1)?;
                let delta = committee_count_at(s)?.safe_rem(active_shards)?;
                shard = shard
                    .safe_add(active_shards)?
                    .safe_sub(delta)?
                    .safe_rem(active_shards)?;
            }
        }

        Ok(shard)
    }

    /// Return the shard served by committee `index` at `slot`.
    pub fn compute_shard_from_committee_index(
        &self,
        slot: Slot,
        index: u64,
        spec: &ChainSpec,
    ) -> Result<u64, Error> {
        let start_shard = self.get_start_shard(slot, spec)?;
        Ok(compute_shard_from_committee_index(start_shard, index, spec)?)
    }

    /// Return the index of the committee serving `shard` at `slot`.
    pub fn compute_committee_index_from_shard(
        &self,
        slot: Slot,
        shard: u64,
        spec: &ChainSpec,
    ) -> Result<u64, Error> {
        let start_shard = self.get_start_shard(slot, spec)?;
        Ok(compute_committee_index_from_shard(start_shard, shard, spec)?)
    }
}
