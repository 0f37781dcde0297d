/// Provides a summary of shard header processing during the epoch.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct EpochProcessingSummary {
    /// Headers confirmed by the end-of-epoch sweep, as opposed to by votes during the epoch.
    pub swept_confirmations: usize,
    /// All confirmed headers of the processed epoch.
    pub confirmed_headers: usize,
    /// The sum of the fees deducted from shard proposers.
    pub fees_charged: u64,
    pub gasprice_before: u64,
    pub gasprice_after: u64,
    /// The start shard of the next epoch.
    pub start_shard: u64,
}

impl EpochProcessingSummary {
    /// Returns the number of headers which were confirmed by committee votes alone.
    pub fn voted_confirmations(&self) -> usize {
        self.confirmed_headers.saturating_sub(self.swept_confirmations)
    }
}
