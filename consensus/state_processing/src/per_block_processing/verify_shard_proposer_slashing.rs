use super::errors::{BlockOperationError, ShardProposerSlashingInvalid as Invalid};
use super::signature_sets::{get_pubkey_from_state, shard_reference_signature_set};
use crate::VerifySignatures;
use types::*;

type Result<T> = std::result::Result<T, BlockOperationError<Invalid>>;

fn error(reason: Invalid) -> BlockOperationError<Invalid> {
    BlockOperationError::invalid(reason)
}

/// Indicates if a `ShardProposerSlashing` is valid to be included in a block in the current epoch
/// of the given state.
///
/// Returns `Ok(())` if the `ShardProposerSlashing` is valid, otherwise indicates the reason for
/// invalidity.
pub fn verify_shard_proposer_slashing<E: EthSpec>(
    proposer_slashing: &ShardProposerSlashing,
    state: &BeaconState<E>,
    verify_signatures: VerifySignatures,
    spec: &ChainSpec,
) -> Result<()> {
    let reference_1 = &proposer_slashing.signed_reference_1.message;
    let reference_2 = &proposer_slashing.signed_reference_2.message;

    // Verify slots match
    verify!(
        reference_1.slot == reference_2.slot,
        Invalid::SlotMismatch(reference_1.slot, reference_2.slot)
    );

    // Verify shards match
    verify!(
        reference_1.shard == reference_2.shard,
        Invalid::ShardMismatch(reference_1.shard, reference_2.shard)
    );

    // Verify reference proposer indices match
    verify!(
        reference_1.proposer_index == reference_2.proposer_index,
        Invalid::ProposerIndexMismatch(reference_1.proposer_index, reference_2.proposer_index)
    );

    // But the references are different
    verify!(reference_1 != reference_2, Invalid::ReferencesIdentical);

    // Check proposer is slashable
    let proposer = state
        .validators
        .get(reference_1.proposer_index as usize)
        .ok_or_else(|| error(Invalid::ProposerUnknown(reference_1.proposer_index)))?;

    verify!(
        proposer.is_slashable_at(state.current_epoch()),
        Invalid::ProposerNotSlashable(reference_1.proposer_index)
    );

    if verify_signatures.is_true() {
        let signature_set_1 = shard_reference_signature_set(
            state,
            |i| get_pubkey_from_state(state, i),
            &proposer_slashing.signed_reference_1,
            spec,
        )?;
        verify!(signature_set_1.verify(), Invalid::BadReference1Signature);

        let signature_set_2 = shard_reference_signature_set(
            state,
            |i| get_pubkey_from_state(state, i),
            &proposer_slashing.signed_reference_2,
            spec,
        )?;
        verify!(signature_set_2.verify(), Invalid::BadReference2Signature);
    }

    Ok(())
}
