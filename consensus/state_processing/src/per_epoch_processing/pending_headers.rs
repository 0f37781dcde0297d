use super::errors::EpochProcessingError;
use crate::common::get_attested_balance;
use types::shard_topology::active_shard_count;
use types::*;

/// Confirm at most one pending shard header for every slot and shard of the epoch now held in
/// the previous-epoch ledger.
///
/// Pairs that already have a header confirmed by votes are left alone. Otherwise the header with
/// the strictly greatest attested balance wins, the earliest in ledger order on a tie. If nobody
/// attested to any header, the empty header is confirmed instead.
///
/// Returns the number of headers confirmed by this sweep.
pub fn process_pending_headers<E: EthSpec>(
    state: &mut BeaconState<E>,
    spec: &ChainSpec,
) -> Result<usize, EpochProcessingError> {
    if state.is_genesis_epoch(spec) {
        return Ok(0);
    }

    let epoch = state.current_epoch();
    let active_shards = active_shard_count(spec);
    let mut winners = vec![];

    for slot in epoch.slot_iter(E::slots_per_epoch()) {
        for shard in 0..active_shards {
            let candidates = state
                .previous_epoch_pending_shard_headers
                .iter()
                .enumerate()
                .filter(|(_, header)| header.is_candidate_for(slot, shard))
                .collect::<Vec<_>>();

            if candidates.is_empty() || candidates.iter().any(|(_, header)| header.confirmed) {
                continue;
            }

            let index = state.compute_committee_index_from_shard(slot, shard, spec)?;
            let committee = state.get_beacon_committee(slot, index, spec)?;

            let mut best: Option<(usize, u64)> = None;
            for (position, header) in &candidates {
                let balance = get_attested_balance(state, &committee, &header.votes)?;
                if best.map_or(true, |(_, best_balance)| balance > best_balance) {
                    best = Some((*position, balance));
                }
            }

            let winner = match best {
                Some((position, balance)) if balance > 0 => Some(position),
                _ => candidates
                    .iter()
                    .find(|(_, header)| header.is_empty_header())
                    .map(|(position, _)| *position),
            };
            winners.extend(winner);
        }
    }

    for position in &winners {
        state
            .previous_epoch_pending_shard_headers
            .get_mut(*position)
            .ok_or(BeaconStateError::PendingShardHeadersOutOfBounds(*position))?
            .confirmed = true;
    }

    Ok(winners.len())
}
