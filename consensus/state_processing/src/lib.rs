// Clippy lint set-up (disabled in tests)
#![cfg_attr(
    not(test),
    deny(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::let_underscore_must_use
    )
)]

#[macro_use]
mod macros;

pub mod common;
pub mod per_block_processing;
pub mod per_epoch_processing;
pub mod per_slot_processing;

pub use per_block_processing::{
    errors::BlockProcessingError, process_shard_operations, VerifySignatures,
};
pub use per_epoch_processing::{
    errors::EpochProcessingError, process_shard_epoch, EpochProcessingSummary,
};
pub use per_slot_processing::{per_slot_processing, Error as SlotProcessingError};
