use safe_arith::SafeArith;
use std::cmp::max;
use types::{BeaconStateError as Error, *};

/// Initiate the exit of the validator of the given `index`.
pub fn initiate_validator_exit<E: EthSpec>(
    state: &mut BeaconState<E>,
    index: usize,
    spec: &ChainSpec,
) -> Result<(), Error> {
    // Return if the validator already initiated exit
    if state.get_validator(index)?.exit_epoch != spec.far_future_epoch {
        return Ok(());
    }

    // Compute exit queue epoch
    let current_epoch = state.current_epoch();
    let mut exit_queue_epoch = state
        .validators
        .iter()
        .map(|v| v.exit_epoch)
        .filter(|exit_epoch| *exit_epoch != spec.far_future_epoch)
        .fold(
            spec.compute_activation_exit_epoch(current_epoch)?,
            max,
        );
    let exit_queue_churn = state
        .validators
        .iter()
        .filter(|v| v.exit_epoch == exit_queue_epoch)
        .count() as u64;

    let active_validator_count = state.get_active_validator_indices(current_epoch).len() as u64;
    if exit_queue_churn >= spec.get_validator_churn_limit(active_validator_count)? {
        exit_queue_epoch.safe_add_assign(1)?;
    }

    let validator = state.get_validator_mut(index)?;
    validator.exit_epoch = exit_queue_epoch;
    validator.withdrawable_epoch =
        exit_queue_epoch.safe_add(spec.min_validator_withdrawability_delay)?;

    Ok(())
}
