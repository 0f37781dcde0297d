#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;

mod chain;
mod config;
mod errors;
pub mod metrics;

pub use self::chain::ShardChain;
pub use self::config::ShardChainConfig;
pub use self::errors::Error;
pub use state_processing::EpochProcessingSummary;
