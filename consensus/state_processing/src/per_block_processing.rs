use errors::BlockOperationError;
use types::*;

pub use self::verify_pending_vote::{verify_pending_vote, PendingVoteUpdate};
pub use self::verify_shard_header::verify_shard_header;
pub use self::verify_shard_proposer_slashing::verify_shard_proposer_slashing;
pub use process_operations::{
    process_pending_votes, process_shard_header, process_shard_headers,
    process_shard_operations, process_shard_proposer_slashings, update_pending_votes,
};

pub mod errors;
pub mod process_operations;
pub mod signature_sets;
mod verify_pending_vote;
mod verify_shard_header;
mod verify_shard_proposer_slashing;

/// The strategy to be used when validating the block's signatures.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum VerifySignatures {
    /// Validate all signatures encountered.
    True,
    /// Do not validate any signature. Use with caution.
    False,
}

impl VerifySignatures {
    pub fn is_true(self) -> bool {
        self == VerifySignatures::True
    }
}
