use crate::*;
use serde::{Deserialize, Serialize};
use ssz::Decode;
use ssz_derive::{Decode, Encode};
use ssz_types::VariableList;
use tree_hash_derive::TreeHash;

/// The body of a sharding-era `BeaconBlock`, restricted to the operations consumed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
#[serde(bound = "E: EthSpec", deny_unknown_fields)]
pub struct BeaconBlockBodySharding<E: EthSpec> {
    pub shard_proposer_slashings: VariableList<ShardProposerSlashing, E::MaxShardProposerSlashings>,
    pub shard_headers: VariableList<SignedShardBlobHeader, E::MaxShardHeaders>,
    pub attestations: VariableList<Attestation<E>, E::MaxAttestations>,
}

impl<E: EthSpec> Default for BeaconBlockBodySharding<E> {
    fn default() -> Self {
        Self {
            shard_proposer_slashings: VariableList::empty(),
            shard_headers: VariableList::empty(),
            attestations: VariableList::empty(),
        }
    }
}

/// A block body of any known fork.
///
/// The variant is fixed once at decode time, so everything downstream works on one concrete
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, TreeHash)]
#[serde(untagged)]
#[serde(bound = "E: EthSpec")]
#[tree_hash(enum_behaviour = "transparent")]
#[ssz(enum_behaviour = "transparent")]
pub enum BeaconBlockBody<E: EthSpec> {
    Sharding(BeaconBlockBodySharding<E>),
}

impl<E: EthSpec> BeaconBlockBody<E> {
    /// SSZ decode with the variant determined by `fork_name`.
    pub fn from_ssz_bytes(bytes: &[u8], fork_name: ForkName) -> Result<Self, ssz::DecodeError> {
        match fork_name {
            ForkName::Sharding => {
                BeaconBlockBodySharding::from_ssz_bytes(bytes).map(BeaconBlockBody::Sharding)
            }
        }
    }

    pub fn fork_name(&self) -> ForkName {
        match self {
            BeaconBlockBody::Sharding(_) => ForkName::Sharding,
        }
    }

    pub fn shard_proposer_slashings(&self) -> &[ShardProposerSlashing] {
        match self {
            BeaconBlockBody::Sharding(body) => &body.shard_proposer_slashings,
        }
    }

    pub fn shard_headers(&self) -> &[SignedShardBlobHeader] {
        match self {
            BeaconBlockBody::Sharding(body) => &body.shard_headers,
        }
    }

    pub fn attestations(&self) -> &[Attestation<E>] {
        match self {
            BeaconBlockBody::Sharding(body) => &body.attestations,
        }
    }
}

impl<E: EthSpec> From<BeaconBlockBodySharding<E>> for BeaconBlockBody<E> {
    fn from(body: BeaconBlockBodySharding<E>) -> Self {
        BeaconBlockBody::Sharding(body)
    }
}
