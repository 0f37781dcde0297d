use super::errors::EpochProcessingError;
use crate::common::{compute_updated_gasprice, decrease_balance};
use safe_arith::SafeArith;
use types::shard_topology::active_shard_count;
use types::*;

/// Charge the proposer of every confirmed header in the previous-epoch ledger, then move the gas
/// price once per confirmed header.
///
/// Fees are all charged at the gas price in force at the start of the epoch; the new price is
/// written after the last header. A proposer who cannot cover the fee is left with a zero
/// balance.
///
/// Returns the total fees deducted.
pub fn charge_confirmed_header_fees<E: EthSpec>(
    state: &mut BeaconState<E>,
    spec: &ChainSpec,
) -> Result<u64, EpochProcessingError> {
    let gasprice = state.shard_gasprice;
    let adjustment_quotient = active_shard_count(spec)
        .safe_mul(E::slots_per_epoch())?
        .safe_mul(spec.gasprice_adjustment_coefficient)?;

    let confirmed_headers = state
        .previous_epoch_pending_shard_headers
        .iter()
        .filter(|header| header.confirmed)
        .map(|header| (header.slot, header.shard, header.commitment.length))
        .collect::<Vec<_>>();

    let mut new_gasprice = gasprice;
    let mut total_fees = 0_u64;
    for (slot, shard, length) in confirmed_headers {
        // Resolved for empty headers too, so a shard without an eligible proposer fails the epoch.
        let proposer_index = state.get_shard_proposer_index(slot, shard, spec)?;
        let fee = gasprice
            .safe_mul(length)?
            .safe_div(spec.target_samples_per_block)?;
        decrease_balance(state, proposer_index, fee)?;
        total_fees.safe_add_assign(fee)?;

        new_gasprice = compute_updated_gasprice(new_gasprice, length, adjustment_quotient, spec)?;
    }
    state.shard_gasprice = new_gasprice;

    Ok(total_fees)
}
