//! Mapping between beacon committees and the shards they are responsible for.
//!
//! Committee `i` at a slot is assigned to shard `(start_shard + i) mod N`, where `N` is the
//! number of active shards and `start_shard` rotates from slot to slot (see
//! `BeaconState::get_start_shard`).

use crate::ChainSpec;
use safe_arith::{ArithError, SafeArith};

/// Return the number of active shards.
///
/// Fixed for the lifetime of the chain at the current protocol version.
pub fn active_shard_count(spec: &ChainSpec) -> u64 {
    spec.initial_active_shards
}

/// Return the shard served by the committee with `index`, given the slot's `start_shard`.
pub fn compute_shard_from_committee_index(
    start_shard: u64,
    index: u64,
    spec: &ChainSpec,
) -> Result<u64, ArithError> {
    index
        .safe_add(start_shard)?
        .safe_rem(active_shard_count(spec))
}

/// Return the index of the committee serving `shard`, given the slot's `start_shard`.
///
/// Inverse of `compute_shard_from_committee_index`.
pub fn compute_committee_index_from_shard(
    start_shard: u64,
    shard: u64,
    spec: &ChainSpec,
) -> Result<u64, ArithError> {
    let active_shards = active_shard_count(spec);
    shard
        .safe_add(active_shards)?
        .safe_sub(start_shard.safe_rem(active_shards)?)?
        .safe_rem(active_shards)
}
