use super::signature_sets::Error as SignatureSetError;
use safe_arith::ArithError;
use types::*;

/// The error returned from the `process_shard_operations` function. Indicates that a block is
/// either invalid, or we were unable to determine its validity (we encountered an unexpected
/// error).
///
/// Any of the `...Invalid` variants indicate that the block is invalid.
#[derive(Debug, PartialEq, Clone)]
pub enum BlockProcessingError {
    ShardProposerSlashingInvalid {
        index: usize,
        reason: ShardProposerSlashingInvalid,
    },
    ShardHeaderInvalid {
        index: usize,
        reason: ShardHeaderInvalid,
    },
    PendingVoteInvalid {
        index: usize,
        reason: PendingVoteInvalid,
    },
    BeaconStateError(BeaconStateError),
    SignatureSetError(SignatureSetError),
    SszTypesError(ssz_types::Error),
    ArithError(ArithError),
}

impl From<BeaconStateError> for BlockProcessingError {
    fn from(e: BeaconStateError) -> Self {
        BlockProcessingError::BeaconStateError(e)
    }
}

impl From<SignatureSetError> for BlockProcessingError {
    fn from(e: SignatureSetError) -> Self {
        BlockProcessingError::SignatureSetError(e)
    }
}

impl From<ssz_types::Error> for BlockProcessingError {
    fn from(error: ssz_types::Error) -> Self {
        BlockProcessingError::SszTypesError(error)
    }
}

impl From<ArithError> for BlockProcessingError {
    fn from(e: ArithError) -> Self {
        BlockProcessingError::ArithError(e)
    }
}

/// A conversion that consumes `self` and adds an `index` variable to resulting struct.
///
/// Used here to allow converting an error into an upstream error that points to the object that
/// caused the error. For example, pointing to the index of a shard header that caused the
/// `BlockProcessingError`.
pub trait IntoWithIndex<T>: Sized {
    fn into_with_index(self, index: usize) -> T;
}

macro_rules! impl_into_block_processing_error_with_index {
    ($($type: ident),*) => {
        $(
            impl IntoWithIndex<BlockProcessingError> for BlockOperationError<$type> {
                fn into_with_index(self, index: usize) -> BlockProcessingError {
                    match self {
                        BlockOperationError::Invalid(reason) => BlockProcessingError::$type {
                            index,
                            reason
                        },
                        BlockOperationError::BeaconStateError(e) => BlockProcessingError::BeaconStateError(e),
                        BlockOperationError::SignatureSetError(e) => BlockProcessingError::SignatureSetError(e),
                        BlockOperationError::SszTypesError(e) => BlockProcessingError::SszTypesError(e),
                        BlockOperationError::ArithError(e) => BlockProcessingError::ArithError(e),
                    }
                }
            }
        )*
    };
}

impl_into_block_processing_error_with_index!(
    ShardProposerSlashingInvalid,
    ShardHeaderInvalid,
    PendingVoteInvalid
);

#[derive(Debug, PartialEq, Clone)]
pub enum BlockOperationError<T> {
    Invalid(T),
    BeaconStateError(BeaconStateError),
    SignatureSetError(SignatureSetError),
    SszTypesError(ssz_types::Error),
    ArithError(ArithError),
}

impl<T> BlockOperationError<T> {
    pub fn invalid(reason: T) -> BlockOperationError<T> {
        BlockOperationError::Invalid(reason)
    }
}

impl<T> From<BeaconStateError> for BlockOperationError<T> {
    fn from(e: BeaconStateError) -> Self {
        BlockOperationError::BeaconStateError(e)
    }
}

impl<T> From<SignatureSetError> for BlockOperationError<T> {
    fn from(e: SignatureSetError) -> Self {
        BlockOperationError::SignatureSetError(e)
    }
}

impl<T> From<ssz_types::Error> for BlockOperationError<T> {
    fn from(error: ssz_types::Error) -> Self {
        BlockOperationError::SszTypesError(error)
    }
}

impl<T> From<ArithError> for BlockOperationError<T> {
    fn from(e: ArithError) -> Self {
        BlockOperationError::ArithError(e)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ShardProposerSlashingInvalid {
    /// The references refer to different slots.
    ///
    /// (reference_1_slot, reference_2_slot)
    SlotMismatch(Slot, Slot),
    /// The references refer to different shards.
    ///
    /// (reference_1_shard, reference_2_shard)
    ShardMismatch(u64, u64),
    /// The references were signed by different proposers.
    ///
    /// (reference_1_proposer, reference_2_proposer)
    ProposerIndexMismatch(u64, u64),
    /// The references are identical, so there is no equivocation.
    ReferencesIdentical,
    /// The specified proposer cannot be found in the validator registry.
    ProposerUnknown(u64),
    /// The specified proposer is not slashable at the current epoch.
    ProposerNotSlashable(u64),
    /// The first reference signature was invalid.
    BadReference1Signature,
    /// The second reference signature was invalid.
    BadReference2Signature,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ShardHeaderInvalid {
    /// The header slot is zero or ahead of the state.
    SlotOutOfRange { header_slot: Slot, state_slot: Slot },
    /// The header epoch is neither the previous nor the current epoch.
    EpochOutsideWindow {
        header_epoch: Epoch,
        previous_epoch: Epoch,
        current_epoch: Epoch,
    },
    /// The header refers to a shard which is not active.
    ShardOutOfRange { shard: u64, active_shards: u64 },
    /// The header was built on a different beacon block than the one at `header.slot - 1`.
    BeaconBlockRootMismatch { state: Hash256, header: Hash256 },
    /// The header proposer is not the proposer selected for this slot and shard.
    ProposerIndexMismatch { state: u64, header: u64 },
    /// The header signature was invalid.
    BadSignature,
    /// The degree proof does not match the commitment.
    InvalidDegreeProof,
    /// A header with the same root is already pending.
    DuplicateHeader(Hash256),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PendingVoteInvalid {
    /// The attestation epoch has no pending header ledger.
    EpochOutsideWindow {
        attestation_epoch: Epoch,
        previous_epoch: Epoch,
        current_epoch: Epoch,
    },
    /// No pending header has the attested root.
    UnknownHeaderRoot(Hash256),
    /// The attested header was proposed for a different slot.
    SlotMismatch { header: Slot, attestation: Slot },
    /// The attested header was proposed for a shard other than the attesting committee's.
    ShardMismatch { header: u64, attestation: u64 },
    /// The aggregation bits are not sized to the committee.
    AggregationBitsLengthMismatch { votes: usize, aggregation_bits: usize },
}
