use crate::{ShardBlobBodySummary, ShardBlobReference, SignatureBytes, SignedRoot, Slot};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A shard blob header, as included in beacon blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct ShardBlobHeader {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub shard: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub body_summary: ShardBlobBodySummary,
}

impl ShardBlobHeader {
    /// Returns the reference form of this header, which replaces the body summary with its root.
    ///
    /// Both forms share a tree-hash root, so a signature over one is a signature over the other.
    pub fn reference(&self) -> ShardBlobReference {
        ShardBlobReference {
            slot: self.slot,
            shard: self.shard,
            proposer_index: self.proposer_index,
            body_root: self.body_summary.tree_hash_root(),
        }
    }
}

impl SignedRoot for ShardBlobHeader {}

/// A `ShardBlobHeader` and a signature from its proposer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct SignedShardBlobHeader {
    pub message: ShardBlobHeader,
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub signature: SignatureBytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataCommitment, Hash256};

    #[test]
    fn reference_shares_root_with_header() {
        let header = ShardBlobHeader {
            slot: Slot::new(9),
            shard: 3,
            proposer_index: 12,
            body_summary: ShardBlobBodySummary {
                commitment: DataCommitment {
                    length: 17,
                    ..DataCommitment::default()
                },
                data_root: Hash256::repeat_byte(1),
                beacon_block_root: Hash256::repeat_byte(2),
                ..ShardBlobBodySummary::default()
            },
        };

        assert_eq!(header.tree_hash_root(), header.reference().tree_hash_root());
    }
}
