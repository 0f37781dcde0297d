use crate::{Hash256, SignatureBytes, SignedRoot, Slot};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// A shard blob header with the body summary collapsed to its root.
///
/// Used as slashing evidence, where only the identity of the signed message matters.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct ShardBlobReference {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub shard: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub body_root: Hash256,
}

impl SignedRoot for ShardBlobReference {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct SignedShardBlobReference {
    pub message: ShardBlobReference,
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub signature: SignatureBytes,
}
