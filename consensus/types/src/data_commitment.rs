use crate::BLSCommitment;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// A KZG commitment to some shard data plus the number of samples it covers.
///
/// A `length` of zero denotes the empty commitment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct DataCommitment {
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub point: BLSCommitment,
    #[serde(with = "serde_utils::quoted_u64")]
    pub length: u64,
}

impl DataCommitment {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
