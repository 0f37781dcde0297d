use crate::{AttestationData, EthSpec, SignatureBytes};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::BitList;
use tree_hash_derive::TreeHash;

/// Details an attestation that can be slashable.
///
/// Only the aggregation bits and shard header vote are consumed by shard processing; the
/// aggregate signature is checked upstream alongside the rest of the attestation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
#[serde(bound = "E: EthSpec")]
pub struct Attestation<E: EthSpec> {
    pub aggregation_bits: BitList<E::MaxValidatorsPerCommittee>,
    pub data: AttestationData,
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub signature: SignatureBytes,
}
