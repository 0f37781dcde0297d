use super::errors::EpochProcessingError;
use safe_arith::SafeArith;
use types::*;

/// Advance the start shard anchor to the first slot of the next epoch.
pub fn process_shard_epoch_increment<E: EthSpec>(
    state: &mut BeaconState<E>,
    spec: &ChainSpec,
) -> Result<(), EpochProcessingError> {
    state.current_epoch_start_shard = state.get_start_shard(state.slot().safe_add(1)?, spec)?;
    Ok(())
}
