use crate::{BLSCommitment, DataCommitment, Hash256};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// Everything a beacon node needs to know about a shard blob body without the body itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct ShardBlobBodySummary {
    /// The actual data commitment.
    pub commitment: DataCommitment,
    /// Proof that the degree of the committed polynomial is below `commitment.length`.
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub degree_proof: BLSCommitment,
    /// Hash-tree-root of the shard data.
    pub data_root: Hash256,
    /// Anchors the blob to a particular beacon chain fork.
    pub beacon_block_root: Hash256,
}
