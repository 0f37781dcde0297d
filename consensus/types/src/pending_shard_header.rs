use crate::{DataCommitment, EthSpec, Hash256, Slot};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::BitList;
use tree_hash_derive::TreeHash;

/// A candidate shard header awaiting confirmation, along with the votes it has collected.
///
/// Bit `i` of `votes` corresponds to member `i` of the beacon committee assigned to
/// (`slot`, `shard`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
#[serde(bound = "E: EthSpec")]
pub struct PendingShardHeader<E: EthSpec> {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub shard: u64,
    pub commitment: DataCommitment,
    /// Hash-tree-root of the `ShardBlobHeader`, or zero for the empty header.
    pub root: Hash256,
    pub votes: BitList<E::MaxValidatorsPerCommittee>,
    pub confirmed: bool,
}

impl<E: EthSpec> PendingShardHeader<E> {
    /// Returns `true` if this record is a candidate for `shard` at `slot`.
    pub fn is_candidate_for(&self, slot: Slot, shard: u64) -> bool {
        self.slot == slot && self.shard == shard
    }

    /// Returns `true` for the empty header seeded at the start of each epoch.
    pub fn is_empty_header(&self) -> bool {
        self.root.is_zero()
    }
}
