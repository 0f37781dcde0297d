//! Committee and proposer sampling.
//!
//! Committees are never cached: every query recomputes the relevant slice of the swap-or-not
//! permutation from the active validator set and a domain-separated seed.

use super::{BeaconState, Error};
use crate::shard_topology::active_shard_count;
use crate::{ChainSpec, Domain, Epoch, EthSpec, Slot};
use safe_arith::SafeArith;
use swap_or_not_shuffle::compute_shuffled_index;

/// Return the `index`'th of `count` equally sized slices of the shuffled `indices`.
pub fn compute_committee(
    indices: &[usize],
    seed: &[u8],
    index: u64,
    count: u64,
    spec: &ChainSpec,
) -> Result<Vec<usize>, Error> {
    let len = indices.len() as u64;
    let start = len.safe_mul(index)?.safe_div(count)?;
    let end = len.safe_mul(index.safe_add(1)?)?.safe_div(count)?;

    (start..end)
        .map(|i| {
            let shuffled_index = compute_shuffled_index(
                i as usize,
                indices.len(),
                seed,
                spec.shuffle_round_count,
            )
            .ok_or(Error::UnableToShuffle)?;
            indices
                .get(shuffled_index)
                .copied()
                .ok_or(Error::ShuffleIndexOutOfBounds(shuffled_index))
        })
        .collect()
}

/// Return the epoch whose validator set and randomness source the committees of `epoch`.
///
/// Committees are fixed for `period` epochs and drawn from the period before that, so the
/// validator set they are sampled from is known well in advance.
pub fn compute_committee_source_epoch(epoch: Epoch, period: u64) -> Result<Epoch, Error> {
    let source_epoch = epoch.safe_sub(epoch.safe_rem(period)?)?;
    if source_epoch >= period {
        Ok(source_epoch.safe_sub(period)?)
    } else {
        Ok(source_epoch)
    }
}

impl<E: EthSpec> BeaconState<E> {
    /// Return the beacon (attester) committee at `slot` with the given committee `index`.
    ///
    /// Vote bitfields for shard headers are sized by this committee.
    pub fn get_beacon_committee(
        &self,
        slot: Slot,
        index: u64,
        spec: &ChainSpec,
    ) -> Result<Vec<usize>, Error> {
        let epoch = slot.epoch(E::slots_per_epoch());
        let committees_per_slot = self.get_committee_count_per_slot(epoch, spec)?;
        if index >= committees_per_slot {
            return Err(Error::NoCommittee { slot, index });
        }

        let indices = self.get_active_validator_indices(epoch);
        let seed = self.get_seed(epoch, Domain::BeaconAttester, spec)?;
        let slot_in_epoch = slot.as_u64().safe_rem(E::slots_per_epoch())?;

        compute_committee(
            &indices,
            seed.as_bytes(),
            slot_in_epoch
                .safe_mul(committees_per_slot)?
                .safe_add(index)?,
            committees_per_slot.safe_mul(E::slots_per_epoch())?,
            spec,
        )
    }

    /// Return the shard committee of the given `epoch` and `shard`.
    ///
    /// Shard committees change once per `shard_committee_period`.
    pub fn get_shard_committee(
        &self,
        epoch: Epoch,
        shard: u64,
        spec: &ChainSpec,
    ) -> Result<Vec<usize>, Error> {
        let active_shards = active_shard_count(spec);
        if shard >= active_shards {
            return Err(Error::ShardOutOfBounds(shard));
        }

        let source_epoch = compute_committee_source_epoch(epoch, spec.shard_committee_period)?;
        let indices = self.get_active_validator_indices(source_epoch);
        let seed = self.get_seed(source_epoch, Domain::ShardCommittee, spec)?;

        compute_committee(&indices, seed.as_bytes(), shard, active_shards, spec)
    }

    /// Return the proposer of the shard block for `shard` at `slot`.
    ///
    /// Sampled from the shard committee, weighted by effective balance. Members who could not pay
    /// the worst-case fee at the current gas price are never chosen.
    pub fn get_shard_proposer_index(
        &self,
        slot: Slot,
        shard: u64,
        spec: &ChainSpec,
    ) -> Result<usize, Error> {
        let epoch = slot.epoch(E::slots_per_epoch());
        let committee = self.get_shard_committee(epoch, shard, spec)?;
        if committee.is_empty() {
            return Err(Error::InsufficientCommittee { slot, shard });
        }

        let seed = self.get_proposer_seed(slot, spec)?;
        let min_effective_balance = self.shard_proposer_min_effective_balance(spec)?;

        self.compute_proposer_index(
            &committee,
            seed.as_bytes(),
            Some(min_effective_balance),
            spec,
        )
        .map_err(|e| match e {
            Error::InsufficientValidators => Error::NoEligibleProposer {
                slot,
                shard,
                min_effective_balance,
            },
            e => e,
        })
    }
}
