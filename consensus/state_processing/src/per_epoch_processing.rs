pub use epoch_processing_summary::EpochProcessingSummary;
use errors::EpochProcessingError as Error;
pub use pending_headers::process_pending_headers;
pub use resets::reset_pending_headers;
pub use shard_epoch_increment::process_shard_epoch_increment;
pub use shard_fees::charge_confirmed_header_fees;
use types::{BeaconState, ChainSpec, EthSpec};

pub mod epoch_processing_summary;
pub mod errors;
pub mod pending_headers;
pub mod resets;
pub mod shard_epoch_increment;
pub mod shard_fees;
#[cfg(test)]
mod tests;

/// Performs shard header processing at the end of an epoch.
///
/// The four steps always run in this order: the ledgers rotate, the closing epoch's headers are
/// confirmed, their proposers are charged and the start shard advances to the next epoch.
pub fn process_shard_epoch<E: EthSpec>(
    state: &mut BeaconState<E>,
    spec: &ChainSpec,
) -> Result<EpochProcessingSummary, Error> {
    let gasprice_before = state.shard_gasprice;

    reset_pending_headers(state, spec)?;
    let swept_confirmations = process_pending_headers(state, spec)?;
    let fees_charged = charge_confirmed_header_fees(state, spec)?;
    process_shard_epoch_increment(state, spec)?;

    let confirmed_headers = state
        .previous_epoch_pending_shard_headers
        .iter()
        .filter(|header| header.confirmed)
        .count();

    Ok(EpochProcessingSummary {
        swept_confirmations,
        confirmed_headers,
        fees_charged,
        gasprice_before,
        gasprice_after: state.shard_gasprice,
        start_shard: state.current_epoch_start_shard,
    })
}
