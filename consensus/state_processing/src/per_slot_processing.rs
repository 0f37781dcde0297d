use crate::per_epoch_processing::{process_shard_epoch, EpochProcessingSummary};
use crate::EpochProcessingError;
use safe_arith::{ArithError, SafeArith};
use types::*;

#[derive(Debug, PartialEq)]
pub enum Error {
    BeaconStateError(BeaconStateError),
    EpochProcessingError(EpochProcessingError),
    ArithError(ArithError),
}

impl From<BeaconStateError> for Error {
    fn from(e: BeaconStateError) -> Self {
        Self::BeaconStateError(e)
    }
}

impl From<EpochProcessingError> for Error {
    fn from(e: EpochProcessingError) -> Self {
        Self::EpochProcessingError(e)
    }
}

impl From<ArithError> for Error {
    fn from(e: ArithError) -> Self {
        Self::ArithError(e)
    }
}

/// Advances a state forward by one slot, performing per-epoch processing if required.
///
/// `block_root` is recorded as the root of the block at the current slot, or of the latest block
/// if the slot was skipped. Shard headers for the next slot must build on it.
pub fn per_slot_processing<E: EthSpec>(
    state: &mut BeaconState<E>,
    block_root: Hash256,
    spec: &ChainSpec,
) -> Result<Option<EpochProcessingSummary>, Error> {
    cache_block_root(state, block_root)?;

    let summary = if state.slot() > spec.genesis_slot
        && state.slot().safe_add(1)?.safe_rem(E::slots_per_epoch())? == 0
    {
        Some(process_shard_epoch(state, spec)?)
    } else {
        None
    };

    state.slot.safe_add_assign(1)?;

    Ok(summary)
}

fn cache_block_root<E: EthSpec>(
    state: &mut BeaconState<E>,
    block_root: Hash256,
) -> Result<(), Error> {
    // Note: increment the state slot here to allow use of our `block_root` setter.
    let previous_slot = state.slot();
    state.slot.safe_add_assign(1)?;

    state.set_block_root(previous_slot, block_root)?;

    // Set the state slot back to what it should be.
    state.slot.safe_sub_assign(1)?;

    Ok(())
}
