use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use types::{ChainSpec, EthSpecId};

/// Sharding parameters of a chain, laid out like the consensus preset YAML files.
///
/// Fields not listed here are taken from the `PRESET_BASE` spec.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ShardChainConfig {
    pub preset_base: EthSpecId,
    #[serde(with = "serde_utils::quoted_u64")]
    pub initial_active_shards: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub shard_committee_period: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_samples_per_block: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub target_samples_per_block: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gasprice_adjustment_coefficient: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_gasprice: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub min_gasprice: u64,
}

impl Default for ShardChainConfig {
    fn default() -> Self {
        Self::from_chain_spec(&ChainSpec::mainnet(), EthSpecId::Mainnet)
    }
}

impl ShardChainConfig {
    pub fn from_chain_spec(spec: &ChainSpec, preset_base: EthSpecId) -> Self {
        Self {
            preset_base,
            initial_active_shards: spec.initial_active_shards,
            shard_committee_period: spec.shard_committee_period,
            max_samples_per_block: spec.max_samples_per_block,
            target_samples_per_block: spec.target_samples_per_block,
            gasprice_adjustment_coefficient: spec.gasprice_adjustment_coefficient,
            max_gasprice: spec.max_gasprice,
            min_gasprice: spec.min_gasprice,
        }
    }

    /// Returns the `PRESET_BASE` spec with the sharding parameters of `self`.
    pub fn apply_to_chain_spec(&self) -> ChainSpec {
        let mut spec = match self.preset_base {
            EthSpecId::Mainnet => ChainSpec::mainnet(),
            EthSpecId::Minimal => ChainSpec::minimal(),
        };

        spec.initial_active_shards = self.initial_active_shards;
        spec.shard_committee_period = self.shard_committee_period;
        spec.max_samples_per_block = self.max_samples_per_block;
        spec.target_samples_per_block = self.target_samples_per_block;
        spec.gasprice_adjustment_coefficient = self.gasprice_adjustment_coefficient;
        spec.max_gasprice = self.max_gasprice;
        spec.min_gasprice = self.min_gasprice;
        spec
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::UnableToOpenFile)?;
        serde_yaml::from_reader(file).map_err(Error::UnableToParseFile)
    }

    /// Write `self` to `path`, overwriting any existing file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path).map_err(Error::UnableToWriteFile)?;
        serde_yaml::to_writer(file, self).map_err(Error::UnableToEncodeFile)
    }
}
