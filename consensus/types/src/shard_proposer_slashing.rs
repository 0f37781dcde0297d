use crate::SignedShardBlobReference;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// Two conflicting shard blob references signed by the same proposer for the same slot and shard.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct ShardProposerSlashing {
    pub signed_reference_1: SignedShardBlobReference,
    pub signed_reference_2: SignedShardBlobReference,
}

impl ShardProposerSlashing {
    /// Get proposer index, assuming slashing validity has already been checked.
    pub fn proposer_index(&self) -> u64 {
        self.signed_reference_1.message.proposer_index
    }
}
