use crate::*;

use safe_arith::{ArithError, SafeArith};
use serde::{Deserialize, Serialize};
use ssz_types::typenum::{
    Unsigned, U1099511627776, U128, U131072, U16, U2048, U256, U32, U4096, U64, U65536, U8,
    U8192,
};
use std::fmt::{self, Debug};
use std::str::FromStr;

const MAINNET: &str = "mainnet";
const MINIMAL: &str = "minimal";

/// Used to identify one of the `EthSpec` instances defined here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EthSpecId {
    Mainnet,
    Minimal,
}

impl FromStr for EthSpecId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MAINNET => Ok(EthSpecId::Mainnet),
            MINIMAL => Ok(EthSpecId::Minimal),
            _ => Err(format!("Unknown eth spec: {}", s)),
        }
    }
}

impl fmt::Display for EthSpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EthSpecId::Mainnet => MAINNET,
            EthSpecId::Minimal => MINIMAL,
        };
        write!(f, "{}", s)
    }
}

pub trait EthSpec: 'static + Default + Sync + Send + Clone + Debug + PartialEq + Eq {
    /*
     * Misc
     */
    type MaxValidatorsPerCommittee: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    /*
     * Time parameters
     */
    type SlotsPerEpoch: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    type SlotsPerHistoricalRoot: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /*
     * State list lengths
     */
    type EpochsPerHistoricalVector: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    type EpochsPerSlashingsVector: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    type ValidatorRegistryLimit: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /*
     * Sharding
     */
    type MaxPendingShardHeaders: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /*
     * Max operations per block
     */
    type MaxShardProposerSlashings: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    type MaxShardHeaders: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    type MaxAttestations: Unsigned + Clone + Sync + Send + Debug + PartialEq;

    fn default_spec() -> ChainSpec;

    fn spec_name() -> EthSpecId;

    /// Return the number of committees per slot.
    ///
    /// Bounded below by one and above by the number of active shards, so that every committee
    /// maps onto a distinct shard.
    fn get_committee_count_per_slot(
        active_validator_count: usize,
        spec: &ChainSpec,
    ) -> Result<u64, ArithError> {
        let slots_per_epoch = Self::SlotsPerEpoch::to_u64();

        Ok(std::cmp::max(
            1,
            std::cmp::min(
                spec.initial_active_shards,
                (active_validator_count as u64)
                    .safe_div(slots_per_epoch)?
                    .safe_div(spec.target_committee_size as u64)?,
            ),
        ))
    }

    /// Returns the `SLOTS_PER_EPOCH` constant for this `EthSpec`.
    fn slots_per_epoch() -> u64 {
        Self::SlotsPerEpoch::to_u64()
    }

    /// Returns the `SLOTS_PER_HISTORICAL_ROOT` constant for this `EthSpec`.
    fn slots_per_historical_root() -> usize {
        Self::SlotsPerHistoricalRoot::to_usize()
    }

    /// Returns the `EPOCHS_PER_HISTORICAL_VECTOR` constant for this `EthSpec`.
    fn epochs_per_historical_vector() -> usize {
        Self::EpochsPerHistoricalVector::to_usize()
    }

    /// Returns the `EPOCHS_PER_SLASHINGS_VECTOR` constant for this `EthSpec`.
    fn epochs_per_slashings_vector() -> usize {
        Self::EpochsPerSlashingsVector::to_usize()
    }

    /// Returns the `MAX_VALIDATORS_PER_COMMITTEE` constant for this `EthSpec`.
    fn max_validators_per_committee() -> usize {
        Self::MaxValidatorsPerCommittee::to_usize()
    }

    /// Returns the `MAX_SHARD_HEADERS` constant for this `EthSpec`.
    fn max_shard_headers() -> usize {
        Self::MaxShardHeaders::to_usize()
    }
}

/// Macro to inherit some type values from another EthSpec.
#[macro_export]
macro_rules! params_from_eth_spec {
    ($spec_ty:ty { $($ty_name:ident),+ }) => {
        $(type $ty_name = <$spec_ty as EthSpec>::$ty_name;)+
    }
}

/// Ethereum Foundation specifications.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MainnetEthSpec;

impl EthSpec for MainnetEthSpec {
    type MaxValidatorsPerCommittee = U2048;
    type SlotsPerEpoch = U32;
    type SlotsPerHistoricalRoot = U8192;
    type EpochsPerHistoricalVector = U65536;
    type EpochsPerSlashingsVector = U8192;
    type ValidatorRegistryLimit = U1099511627776;
    type MaxPendingShardHeaders = U131072;
    type MaxShardProposerSlashings = U16;
    type MaxShardHeaders = U4096;
    type MaxAttestations = U128;

    fn default_spec() -> ChainSpec {
        ChainSpec::mainnet()
    }

    fn spec_name() -> EthSpecId {
        EthSpecId::Mainnet
    }
}

/// Ethereum Foundation minimal spec, as defined in the consensus-specs repo.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MinimalEthSpec;

impl EthSpec for MinimalEthSpec {
    type SlotsPerEpoch = U8;
    type SlotsPerHistoricalRoot = U64;
    type EpochsPerHistoricalVector = U64;
    type EpochsPerSlashingsVector = U64;
    type MaxPendingShardHeaders = U256;
    type MaxShardHeaders = U32;

    params_from_eth_spec!(MainnetEthSpec {
        MaxValidatorsPerCommittee,
        ValidatorRegistryLimit,
        MaxShardProposerSlashings,
        MaxAttestations
    });

    fn default_spec() -> ChainSpec {
        ChainSpec::minimal()
    }

    fn spec_name() -> EthSpecId {
        EthSpecId::Minimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committee_count_with_no_validators_is_one() {
        let spec = ChainSpec::minimal();
        assert_eq!(MinimalEthSpec::get_committee_count_per_slot(0, &spec), Ok(1));
    }

    #[test]
    fn committee_count_is_capped_at_active_shards() {
        let spec = ChainSpec::minimal();
        let many = 1_000_000;
        assert_eq!(
            MinimalEthSpec::get_committee_count_per_slot(many, &spec),
            Ok(spec.initial_active_shards)
        );
    }

    #[test]
    fn committee_count_grows_with_validators() {
        let spec = ChainSpec::mainnet();
        // 32 slots * 128 members * 3 committees.
        assert_eq!(
            MainnetEthSpec::get_committee_count_per_slot(32 * 128 * 3, &spec),
            Ok(3)
        );
    }

    #[test]
    fn committee_count_errors_on_zero_committee_size() {
        let mut spec = ChainSpec::minimal();
        spec.target_committee_size = 0;
        assert_eq!(
            MinimalEthSpec::get_committee_count_per_slot(64, &spec),
            Err(ArithError::DivisionByZero)
        );
    }

    #[test]
    fn spec_id_round_trips_through_str() {
        for id in [EthSpecId::Mainnet, EthSpecId::Minimal] {
            assert_eq!(EthSpecId::from_str(&id.to_string()), Ok(id));
        }
    }
}
