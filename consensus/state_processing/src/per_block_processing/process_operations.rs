use super::*;
use crate::common::slash_validator;
use crate::per_block_processing::errors::{
    BlockProcessingError, IntoWithIndex, PendingVoteInvalid, ShardHeaderInvalid,
};

/// Apply the shard operations of `block_body` to `state`, in the order they appear in the body.
///
/// Proposer slashings come first, then shard headers, then attestations, so that attestations can
/// vote on headers included by the same block.
pub fn process_shard_operations<E: EthSpec>(
    state: &mut BeaconState<E>,
    block_body: &BeaconBlockBody<E>,
    verify_signatures: VerifySignatures,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    process_shard_proposer_slashings(
        state,
        block_body.shard_proposer_slashings(),
        verify_signatures,
        spec,
    )?;
    process_shard_headers(state, block_body.shard_headers(), verify_signatures, spec)?;
    process_pending_votes(state, block_body.attestations(), spec)?;

    Ok(())
}

/// Validates each `ShardProposerSlashing` and updates the state, short-circuiting on an invalid
/// object.
///
/// Returns `Ok(())` if the validation and state updates completed successfully, otherwise returns
/// an `Err` describing the invalid object or cause of failure.
pub fn process_shard_proposer_slashings<E: EthSpec>(
    state: &mut BeaconState<E>,
    proposer_slashings: &[ShardProposerSlashing],
    verify_signatures: VerifySignatures,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    // Verify and apply proposer slashings in series.
    // We have to verify in series because an invalid block may contain multiple slashings
    // for the same validator, and we need to correctly detect and reject that.
    proposer_slashings
        .iter()
        .enumerate()
        .try_for_each(|(i, proposer_slashing)| {
            verify_shard_proposer_slashing(proposer_slashing, state, verify_signatures, spec)
                .map_err(|e| e.into_with_index(i))?;

            slash_validator(
                state,
                proposer_slashing.proposer_index() as usize,
                None,
                spec,
            )?;

            Ok(())
        })
}

/// Validates each `SignedShardBlobHeader` and appends it to the pending header ledger of its
/// epoch, short-circuiting on an invalid object.
pub fn process_shard_headers<E: EthSpec>(
    state: &mut BeaconState<E>,
    shard_headers: &[SignedShardBlobHeader],
    verify_signatures: VerifySignatures,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    for (i, signed_header) in shard_headers.iter().enumerate() {
        process_shard_header(state, signed_header, verify_signatures, spec)
            .map_err(|e| e.into_with_index(i))?;
    }
    Ok(())
}

/// Validates a single `SignedShardBlobHeader` and appends it to the pending header ledger of its
/// epoch, with an empty vote for every member of the committee assigned to its shard.
///
/// The state is unchanged if an error is returned.
pub fn process_shard_header<E: EthSpec>(
    state: &mut BeaconState<E>,
    signed_header: &SignedShardBlobHeader,
    verify_signatures: VerifySignatures,
    spec: &ChainSpec,
) -> Result<(), BlockOperationError<ShardHeaderInvalid>> {
    let header_root = verify_shard_header(signed_header, state, verify_signatures, spec)?;

    let header = &signed_header.message;
    let committee_index =
        state.compute_committee_index_from_shard(header.slot, header.shard, spec)?;
    let committee_len = state
        .get_beacon_committee(header.slot, committee_index, spec)?
        .len();

    let pending_header = PendingShardHeader {
        slot: header.slot,
        shard: header.shard,
        commitment: header.body_summary.commitment.clone(),
        root: header_root,
        votes: BitList::with_capacity(committee_len)?,
        confirmed: false,
    };

    state
        .get_pending_shard_headers_mut(header.slot.epoch(E::slots_per_epoch()))?
        .push(pending_header)?;

    Ok(())
}

/// Count the shard header vote of each `Attestation`, short-circuiting on an invalid object.
pub fn process_pending_votes<E: EthSpec>(
    state: &mut BeaconState<E>,
    attestations: &[Attestation<E>],
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    for (i, attestation) in attestations.iter().enumerate() {
        update_pending_votes(state, attestation, spec).map_err(|e| e.into_with_index(i))?;
    }
    Ok(())
}

/// Add the votes of `attestation` to the pending shard header it attests to, confirming the
/// header once more than two thirds of the committee balance has voted for it.
///
/// The state is unchanged if an error is returned, or if another header for the same slot and
/// shard is already confirmed.
pub fn update_pending_votes<E: EthSpec>(
    state: &mut BeaconState<E>,
    attestation: &Attestation<E>,
    spec: &ChainSpec,
) -> Result<(), BlockOperationError<PendingVoteInvalid>> {
    let Some(update) = verify_pending_vote(attestation, state, spec)? else {
        return Ok(());
    };

    let pending_header = state
        .get_pending_shard_headers_mut(update.epoch)?
        .get_mut(update.position)
        .ok_or(BeaconStateError::PendingShardHeadersOutOfBounds(update.position))?;
    pending_header.votes = update.votes;
    pending_header.confirmed = update.confirmed;

    Ok(())
}
