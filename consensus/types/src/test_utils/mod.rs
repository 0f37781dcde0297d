//! Builders for deterministic states and signed operations.
//!
//! These are for testing only and must never be used to produce real signatures.

mod generate_deterministic_keypairs;
mod testing_beacon_state_builder;
mod testing_shard_header_builder;
mod testing_shard_proposer_slashing_builder;

pub use generate_deterministic_keypairs::{
    generate_deterministic_keypair, generate_deterministic_keypairs,
};
pub use testing_beacon_state_builder::TestingBeaconStateBuilder;
pub use testing_shard_header_builder::TestingShardHeaderBuilder;
pub use testing_shard_proposer_slashing_builder::TestingShardProposerSlashingBuilder;
