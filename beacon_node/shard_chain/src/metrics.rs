pub use prometheus::Error;
use prometheus::{Histogram, HistogramTimer, IntCounter, IntGauge, Result};

pub fn start_timer(histogram: &Result<Histogram>) -> Option<HistogramTimer> {
    if let Ok(histogram) = histogram {
        Some(histogram.start_timer())
    } else {
        None
    }
}

pub fn stop_timer(timer: Option<HistogramTimer>) {
    if let Some(timer) = timer {
        timer.observe_duration();
    }
}

pub fn inc_counter(counter: &Result<IntCounter>) {
    if let Ok(counter) = counter {
        counter.inc();
    }
}

pub fn inc_counter_by(counter: &Result<IntCounter>, value: u64) {
    if let Ok(counter) = counter {
        counter.inc_by(value);
    }
}

pub fn set_gauge(gauge: &Result<IntGauge>, value: i64) {
    if let Ok(gauge) = gauge {
        gauge.set(value);
    }
}

lazy_static! {
    /*
     * Block Processing
     */
    pub static ref BLOCK_PROCESSING_REQUESTS: Result<IntCounter> = register_int_counter!(
        "shard_chain_block_processing_requests",
        "Count of blocks submitted for shard operation processing"
    );
    pub static ref BLOCK_PROCESSING_SUCCESSES: Result<IntCounter> = register_int_counter!(
        "shard_chain_block_processing_successes",
        "Count of blocks whose shard operations applied without error"
    );
    pub static ref BLOCK_PROCESSING_TIMES: Result<Histogram> = register_histogram!(
        "shard_chain_block_processing_seconds",
        "Full runtime of shard operation processing"
    );
    pub static ref SHARD_HEADERS_PROCESSED: Result<IntCounter> = register_int_counter!(
        "shard_headers_processed_total",
        "Count of shard headers added to a pending ledger"
    );

    /*
     * Epoch Processing
     */
    pub static ref SHARD_HEADERS_CONFIRMED: Result<IntCounter> = register_int_counter!(
        "shard_headers_confirmed_total",
        "Count of shard headers confirmed, by votes or by the end of epoch sweep"
    );
    pub static ref SHARD_EPOCH_PROCESSING_TIMES: Result<Histogram> = register_histogram!(
        "shard_epoch_processing_seconds",
        "Time taken to advance the state across an epoch boundary"
    );
    pub static ref SHARD_GASPRICE: Result<IntGauge> = register_int_gauge!(
        "shard_gasprice",
        "Shard gas price after the latest epoch"
    );
}
