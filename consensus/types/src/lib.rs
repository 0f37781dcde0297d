//! Ethereum types for the sharded beacon chain: slots and epochs, the chain specification,
//! shard header containers and the parts of `BeaconState` consumed by shard processing.

// Required for big type-level numbers
#![recursion_limit = "128"]

#[macro_use]
mod slot_epoch_macros;

pub mod test_utils;

pub mod attestation;
pub mod attestation_data;
pub mod beacon_block_body;
pub mod beacon_state;
pub mod chain_spec;
pub mod checkpoint;
pub mod consts;
pub mod data_commitment;
pub mod eth_spec;
pub mod fork;
pub mod fork_data;
pub mod fork_name;
pub mod pending_shard_header;
pub mod shard_blob_body_summary;
pub mod shard_blob_header;
pub mod shard_blob_reference;
pub mod shard_proposer_slashing;
pub mod shard_topology;
pub mod signing_data;
pub mod slot_epoch;
pub mod validator;

use ethereum_types::H256;
use ssz_types::{typenum, FixedVector};

pub use crate::attestation::Attestation;
pub use crate::attestation_data::AttestationData;
pub use crate::beacon_block_body::{BeaconBlockBody, BeaconBlockBodySharding};
pub use crate::beacon_state::{BeaconState, Error as BeaconStateError, PendingShardHeaders};
pub use crate::chain_spec::{ChainSpec, Domain};
pub use crate::checkpoint::Checkpoint;
pub use crate::data_commitment::DataCommitment;
pub use crate::eth_spec::EthSpecId;
pub use crate::fork::Fork;
pub use crate::fork_data::ForkData;
pub use crate::fork_name::ForkName;
pub use crate::pending_shard_header::PendingShardHeader;
pub use crate::shard_blob_body_summary::ShardBlobBodySummary;
pub use crate::shard_blob_header::{ShardBlobHeader, SignedShardBlobHeader};
pub use crate::shard_blob_reference::{ShardBlobReference, SignedShardBlobReference};
pub use crate::shard_proposer_slashing::ShardProposerSlashing;
pub use crate::signing_data::{SignedRoot, SigningData};
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::validator::Validator;

pub type Hash256 = H256;
pub type CommitteeIndex = u64;
pub type Shard = u64;

/// Compressed BLS public key bytes, decompressed only when a signature is checked.
pub type PublicKeyBytes = FixedVector<u8, typenum::U48>;
/// Compressed BLS signature bytes.
pub type SignatureBytes = FixedVector<u8, typenum::U96>;
/// Compressed G1 point of a KZG commitment.
pub type BLSCommitment = FixedVector<u8, typenum::U48>;

pub use bls::{Keypair, PublicKey, SecretKey, Signature, SignatureSet};
pub use eth_spec::{EthSpec, MainnetEthSpec, MinimalEthSpec};
pub use ssz_types::{BitList, VariableList};
