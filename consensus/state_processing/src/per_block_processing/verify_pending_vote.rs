use super::errors::{BlockOperationError, PendingVoteInvalid as Invalid};
use crate::common::get_attested_balance;
use safe_arith::SafeArith;
use types::*;

type Result<T> = std::result::Result<T, BlockOperationError<Invalid>>;

fn error(reason: Invalid) -> BlockOperationError<Invalid> {
    BlockOperationError::invalid(reason)
}

/// The change an attestation makes to a single pending shard header.
#[derive(Debug, PartialEq, Clone)]
pub struct PendingVoteUpdate<E: EthSpec> {
    /// The epoch of the ledger holding the header.
    pub epoch: Epoch,
    /// The position of the header within its ledger.
    pub position: usize,
    /// The header votes after the attestation has been counted.
    pub votes: BitList<E::MaxValidatorsPerCommittee>,
    /// Whether the header is confirmed after the attestation has been counted.
    pub confirmed: bool,
}

/// Verify that `attestation` votes for a pending shard header in the state and compute the
/// resulting update to that header.
///
/// Returns `Ok(None)` if a header for the same slot and shard is already confirmed, in which case
/// the attestation changes nothing.
pub fn verify_pending_vote<E: EthSpec>(
    attestation: &Attestation<E>,
    state: &BeaconState<E>,
    spec: &ChainSpec,
) -> Result<Option<PendingVoteUpdate<E>>> {
    let data = &attestation.data;

    let epoch = data.slot.epoch(E::slots_per_epoch());
    verify!(
        epoch == state.previous_epoch() || epoch == state.current_epoch(),
        Invalid::EpochOutsideWindow {
            attestation_epoch: epoch,
            previous_epoch: state.previous_epoch(),
            current_epoch: state.current_epoch(),
        }
    );

    let shard = state.compute_shard_from_committee_index(data.slot, data.index, spec)?;
    let pending_headers = state.get_pending_shard_headers(epoch)?;

    // The empty headers of an epoch all share the zero root, so prefer the one for this slot and
    // shard over the first root match.
    let position = match pending_headers
        .iter()
        .position(|h| h.root == data.shard_header_root && h.is_candidate_for(data.slot, shard))
    {
        Some(position) => position,
        None => {
            let header = pending_headers
                .iter()
                .find(|h| h.root == data.shard_header_root)
                .ok_or_else(|| error(Invalid::UnknownHeaderRoot(data.shard_header_root)))?;
            verify!(
                header.slot == data.slot,
                Invalid::SlotMismatch {
                    header: header.slot,
                    attestation: data.slot,
                }
            );
            return Err(error(Invalid::ShardMismatch {
                header: header.shard,
                attestation: shard,
            }));
        }
    };
    let header = pending_headers
        .get(position)
        .ok_or(BeaconStateError::PendingShardHeadersOutOfBounds(position))?;

    verify!(
        attestation.aggregation_bits.len() == header.votes.len(),
        Invalid::AggregationBitsLengthMismatch {
            votes: header.votes.len(),
            aggregation_bits: attestation.aggregation_bits.len(),
        }
    );

    // The first confirmed header for a slot and shard wins.
    if pending_headers
        .iter()
        .any(|h| h.is_candidate_for(data.slot, shard) && h.confirmed)
    {
        return Ok(None);
    }

    let votes = header.votes.union(&attestation.aggregation_bits);

    let committee = state.get_beacon_committee(data.slot, data.index, spec)?;
    let voted_balance = get_attested_balance(state, &committee, &votes)?;
    let committee_balance = state.get_total_balance(&committee, spec)?;
    let confirmed = voted_balance.safe_mul(3)? > committee_balance.safe_mul(2)?;

    Ok(Some(PendingVoteUpdate {
        epoch,
        position,
        votes,
        confirmed,
    }))
}
