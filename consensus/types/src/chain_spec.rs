use crate::*;
use safe_arith::{ArithError, SafeArith};
use tree_hash::TreeHash;

/// Each of the BLS signature domains.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Domain {
    BeaconProposer,
    BeaconAttester,
    ShardProposer,
    ShardCommittee,
}

/// Holds all the "constants" for a sharded beacon chain.
///
/// Values that also need to be known at compile time (list lengths and the like) live on
/// `EthSpec`. Everything here may be overridden at runtime.
#[derive(PartialEq, Debug, Clone)]
pub struct ChainSpec {
    /*
     * Constants
     */
    pub genesis_slot: Slot,
    pub far_future_epoch: Epoch,

    /*
     * Misc
     */
    pub target_committee_size: usize,
    pub min_per_epoch_churn_limit: u64,
    pub churn_limit_quotient: u64,
    pub shuffle_round_count: u8,
    pub hysteresis_quotient: u64,
    pub hysteresis_downward_multiplier: u64,
    pub hysteresis_upward_multiplier: u64,

    /*
     *  Gwei values
     */
    pub max_effective_balance: u64,
    pub effective_balance_increment: u64,

    /*
     * Initial Values
     */
    pub genesis_fork_version: [u8; 4],

    /*
     * Time parameters
     */
    pub min_seed_lookahead: Epoch,
    pub max_seed_lookahead: Epoch,
    pub min_validator_withdrawability_delay: Epoch,
    pub shard_committee_period: u64,

    /*
     * Reward and penalty quotients
     */
    pub whistleblower_reward_quotient: u64,
    pub proposer_reward_quotient: u64,
    pub min_slashing_penalty_quotient: u64,

    /*
     * Sharding
     */
    pub initial_active_shards: u64,
    pub max_samples_per_block: u64,
    pub target_samples_per_block: u64,
    pub gasprice_adjustment_coefficient: u64,
    pub max_gasprice: u64,
    pub min_gasprice: u64,

    /*
     * Signature domains
     */
    pub(crate) domain_beacon_proposer: u32,
    pub(crate) domain_beacon_attester: u32,
    pub(crate) domain_shard_proposer: u32,
    pub(crate) domain_shard_committee: u32,
}

impl ChainSpec {
    /// Get the domain number, unmodified by the fork.
    pub fn get_domain_constant(&self, domain: Domain) -> u32 {
        match domain {
            Domain::BeaconProposer => self.domain_beacon_proposer,
            Domain::BeaconAttester => self.domain_beacon_attester,
            Domain::ShardProposer => self.domain_shard_proposer,
            Domain::ShardCommittee => self.domain_shard_committee,
        }
    }

    /// Get the domain that represents the fork meta and signature domain.
    pub fn get_domain(
        &self,
        epoch: Epoch,
        domain: Domain,
        fork: &Fork,
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let fork_version = fork.get_fork_version(epoch);
        self.compute_domain(domain, fork_version, genesis_validators_root)
    }

    /// Return the 32-byte fork data root for the `current_version` and `genesis_validators_root`.
    ///
    /// This is used primarily in signature domains to avoid collisions across forks/chains.
    pub fn compute_fork_data_root(
        current_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        ForkData {
            current_version,
            genesis_validators_root,
        }
        .tree_hash_root()
    }

    /// Compute a domain by applying the given `fork_version`.
    pub fn compute_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let domain_constant = self.get_domain_constant(domain);

        let mut domain = [0; 32];
        domain[0..4].copy_from_slice(&domain_constant.to_le_bytes());
        domain[4..].copy_from_slice(
            &Self::compute_fork_data_root(fork_version, genesis_validators_root).as_bytes()[..28],
        );

        Hash256::from(domain)
    }

    /// Return the epoch at which an exit or activation initiated during `epoch` takes effect.
    pub fn compute_activation_exit_epoch(&self, epoch: Epoch) -> Result<Epoch, ArithError> {
        epoch.safe_add(1)?.safe_add(self.max_seed_lookahead)
    }

    /// Returns the number of validators that may exit during a single epoch.
    pub fn get_validator_churn_limit(
        &self,
        active_validator_count: u64,
    ) -> Result<u64, ArithError> {
        Ok(std::cmp::max(
            self.min_per_epoch_churn_limit,
            active_validator_count.safe_div(self.churn_limit_quotient)?,
        ))
    }

    /// Returns a `ChainSpec` compatible with the mainnet preset.
    pub fn mainnet() -> Self {
        Self {
            /*
             * Constants
             */
            genesis_slot: Slot::new(0),
            far_future_epoch: Epoch::new(u64::MAX),

            /*
             * Misc
             */
            target_committee_size: 128,
            min_per_epoch_churn_limit: 4,
            churn_limit_quotient: 65_536,
            shuffle_round_count: 90,
            hysteresis_quotient: 4,
            hysteresis_downward_multiplier: 1,
            hysteresis_upward_multiplier: 5,

            /*
             *  Gwei values
             */
            max_effective_balance: 32_000_000_000,
            effective_balance_increment: 1_000_000_000,

            /*
             * Initial Values
             */
            genesis_fork_version: [0; 4],

            /*
             * Time parameters
             */
            min_seed_lookahead: Epoch::new(1),
            max_seed_lookahead: Epoch::new(4),
            min_validator_withdrawability_delay: Epoch::new(256),
            shard_committee_period: 256,

            /*
             * Reward and penalty quotients
             */
            whistleblower_reward_quotient: 512,
            proposer_reward_quotient: 8,
            min_slashing_penalty_quotient: 128,

            /*
             * Sharding
             */
            initial_active_shards: 64,
            max_samples_per_block: 2_048,
            target_samples_per_block: 1_024,
            gasprice_adjustment_coefficient: 8,
            max_gasprice: 8_589_934_592,
            min_gasprice: 8,

            /*
             * Signature domains
             */
            domain_beacon_proposer: 0,
            domain_beacon_attester: 1,
            domain_shard_proposer: 128,
            domain_shard_committee: 129,
        }
    }

    /// Ethereum Foundation minimal spec, as defined in the consensus-specs repo.
    pub fn minimal() -> Self {
        Self {
            target_committee_size: 4,
            churn_limit_quotient: 32,
            shuffle_round_count: 10,
            genesis_fork_version: [0x00, 0x00, 0x00, 0x01],
            shard_committee_period: 64,
            initial_active_shards: 2,
            ..ChainSpec::mainnet()
        }
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::mainnet()
    }
}
