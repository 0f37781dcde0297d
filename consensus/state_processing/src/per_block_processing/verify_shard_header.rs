use super::errors::{BlockOperationError, ShardHeaderInvalid as Invalid};
use super::signature_sets::{get_pubkey_from_state, shard_header_signature_set};
use crate::VerifySignatures;
use safe_arith::SafeArith;
use tree_hash::TreeHash;
use types::consts::sharding::G1_SETUP_0;
use types::shard_topology::active_shard_count;
use types::*;

type Result<T> = std::result::Result<T, BlockOperationError<Invalid>>;

/// Indicates if a `SignedShardBlobHeader` is valid to be included in a block at the slot of the
/// given state.
///
/// Returns the root of the header if it is valid, otherwise indicates the reason for invalidity.
/// The state is never modified.
pub fn verify_shard_header<E: EthSpec>(
    signed_header: &SignedShardBlobHeader,
    state: &BeaconState<E>,
    verify_signatures: VerifySignatures,
    spec: &ChainSpec,
) -> Result<Hash256> {
    let header = &signed_header.message;

    // Verify the header is not 0, and not from the future.
    verify!(
        header.slot > spec.genesis_slot && header.slot <= state.slot(),
        Invalid::SlotOutOfRange {
            header_slot: header.slot,
            state_slot: state.slot(),
        }
    );

    // Verify that the header is within the processing time window.
    let header_epoch = header.slot.epoch(E::slots_per_epoch());
    verify!(
        header_epoch == state.previous_epoch() || header_epoch == state.current_epoch(),
        Invalid::EpochOutsideWindow {
            header_epoch,
            previous_epoch: state.previous_epoch(),
            current_epoch: state.current_epoch(),
        }
    );

    // Verify that the shard is active.
    let active_shards = active_shard_count(spec);
    verify!(
        header.shard < active_shards,
        Invalid::ShardOutOfRange {
            shard: header.shard,
            active_shards,
        }
    );

    // Verify that the block root matches, so the header is only valid on this beacon chain
    // sub-tree.
    let block_root = *state.get_block_root(header.slot.safe_sub(1)?)?;
    verify!(
        header.body_summary.beacon_block_root == block_root,
        Invalid::BeaconBlockRootMismatch {
            state: block_root,
            header: header.body_summary.beacon_block_root,
        }
    );

    // Verify proposer.
    let proposer_index = state.get_shard_proposer_index(header.slot, header.shard, spec)? as u64;
    verify!(
        header.proposer_index == proposer_index,
        Invalid::ProposerIndexMismatch {
            state: proposer_index,
            header: header.proposer_index,
        }
    );

    // Verify signature.
    if verify_signatures.is_true() {
        verify!(
            shard_header_signature_set(
                state,
                |i| get_pubkey_from_state(state, i),
                signed_header,
                spec
            )?
            .verify(),
            Invalid::BadSignature
        );
    }

    // Verify the length by verifying the degree.
    let body_summary = &header.body_summary;
    if body_summary.commitment.is_empty() {
        verify!(
            body_summary.degree_proof[..] == G1_SETUP_0[..],
            Invalid::InvalidDegreeProof
        );
    }
    // TODO: check e(degree_proof, G2_SETUP[0]) == e(commitment.point, G2_SETUP[-length]) once a
    // G2 trusted setup is available to this crate.

    // Check that this header is not yet pending.
    let header_root = header.tree_hash_root();
    verify!(
        !state
            .get_pending_shard_headers(header_epoch)?
            .iter()
            .any(|pending| pending.root == header_root),
        Invalid::DuplicateHeader(header_root)
    );

    Ok(header_root)
}
