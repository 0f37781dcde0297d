use super::errors::EpochProcessingError;
use types::*;

/// Retire the current epoch's pending shard headers and seed the next epoch's ledger.
///
/// The current ledger moves into the previous slot, discarding the old previous ledger. The new
/// current ledger holds one empty header per committee of every slot in the next epoch, so that
/// there is always a candidate to confirm when nobody attests.
pub fn reset_pending_headers<E: EthSpec>(
    state: &mut BeaconState<E>,
    spec: &ChainSpec,
) -> Result<(), EpochProcessingError> {
    let next_epoch = state.next_epoch()?;
    let committees_per_slot = state.get_committee_count_per_slot(next_epoch, spec)?;

    let mut empty_headers = vec![];
    for slot in next_epoch.slot_iter(E::slots_per_epoch()) {
        for index in 0..committees_per_slot {
            let shard = state.compute_shard_from_committee_index(slot, index, spec)?;
            let committee_len = state.get_beacon_committee(slot, index, spec)?.len();
            empty_headers.push(PendingShardHeader {
                slot,
                shard,
                commitment: DataCommitment::default(),
                root: Hash256::zero(),
                votes: BitList::with_capacity(committee_len)?,
                confirmed: false,
            });
        }
    }

    let current_headers = std::mem::replace(
        &mut state.current_epoch_pending_shard_headers,
        VariableList::new(empty_headers)?,
    );
    state.previous_epoch_pending_shard_headers = current_headers;

    Ok(())
}
