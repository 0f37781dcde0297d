use crate::consts::sharding::MAX_RANDOM_BYTE;
use crate::*;
use ethereum_hashing::hash;
use safe_arith::{ArithError, SafeArith};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum::Unsigned, FixedVector, VariableList};
use swap_or_not_shuffle::compute_shuffled_index;
use tree_hash_derive::TreeHash;

pub use self::committee::{compute_committee, compute_committee_source_epoch};

mod committee;
mod rotation;

/// The list type holding one epoch's worth of candidate shard headers.
pub type PendingShardHeaders<E> =
    VariableList<PendingShardHeader<E>, <E as EthSpec>::MaxPendingShardHeaders>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    EpochOutOfBounds,
    SlotOutOfBounds,
    UnknownValidator(usize),
    UnableToShuffle,
    ShuffleIndexOutOfBounds(usize),
    BlockRootsOutOfBounds(usize),
    SlashingsOutOfBounds(usize),
    BalancesOutOfBounds(usize),
    RandaoMixesOutOfBounds(usize),
    InsufficientValidators,
    /// The committee responsible for a shard has no members.
    InsufficientCommittee {
        slot: Slot,
        shard: u64,
    },
    /// No committee member has enough effective balance to cover the worst-case fee.
    NoEligibleProposer {
        slot: Slot,
        shard: u64,
        min_effective_balance: u64,
    },
    NoCommittee {
        slot: Slot,
        index: u64,
    },
    ShardOutOfBounds(u64),
    PendingShardHeadersOutOfBounds(usize),
    /// A vote bitfield does not have one bit per committee member.
    InvalidBitfield,
    SszTypesError(ssz_types::Error),
    /// An arithmetic operation occurred which would have overflowed or divided by 0.
    ArithError(ArithError),
}

/// The state of the `BeaconChain` at some slot, as far as shard processing is concerned.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
#[serde(bound = "E: EthSpec")]
pub struct BeaconState<E: EthSpec> {
    // Versioning
    pub genesis_validators_root: Hash256,
    pub slot: Slot,
    pub fork: Fork,

    // History
    pub block_roots: FixedVector<Hash256, E::SlotsPerHistoricalRoot>,

    // Registry
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,

    // Randomness
    pub randao_mixes: FixedVector<Hash256, E::EpochsPerHistoricalVector>,

    // Slashings
    #[serde(with = "ssz_types::serde_utils::quoted_u64_fixed_vec")]
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,

    // Sharding
    pub previous_epoch_pending_shard_headers: PendingShardHeaders<E>,
    pub current_epoch_pending_shard_headers: PendingShardHeaders<E>,
    #[serde(with = "serde_utils::quoted_u64")]
    pub current_epoch_start_shard: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub shard_gasprice: u64,
}

impl<E: EthSpec> BeaconState<E> {
    /// Create an empty state at the genesis slot.
    ///
    /// Validators, balances and history are expected to be filled in by the caller.
    pub fn new(genesis_validators_root: Hash256, spec: &ChainSpec) -> Self {
        BeaconState {
            genesis_validators_root,
            slot: spec.genesis_slot,
            fork: Fork {
                previous_version: spec.genesis_fork_version,
                current_version: spec.genesis_fork_version,
                epoch: spec.genesis_slot.epoch(E::slots_per_epoch()),
            },

            block_roots: FixedVector::from_elem(Hash256::zero()),

            validators: VariableList::empty(),
            balances: VariableList::empty(),

            randao_mixes: FixedVector::from_elem(Hash256::zero()),

            slashings: FixedVector::from_elem(0),

            previous_epoch_pending_shard_headers: VariableList::empty(),
            current_epoch_pending_shard_headers: VariableList::empty(),
            current_epoch_start_shard: 0,
            shard_gasprice: spec.min_gasprice,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// The epoch corresponding to `self.slot`.
    pub fn current_epoch(&self) -> Epoch {
        self.slot.epoch(E::slots_per_epoch())
    }

    /// The epoch prior to `self.current_epoch()`.
    ///
    /// If the current epoch is the genesis epoch, the genesis_epoch is returned.
    pub fn previous_epoch(&self) -> Epoch {
        let current_epoch = self.current_epoch();
        if let Ok(prev_epoch) = current_epoch.safe_sub(1) {
            prev_epoch
        } else {
            current_epoch
        }
    }

    /// The epoch following `self.current_epoch()`.
    pub fn next_epoch(&self) -> Result<Epoch, Error> {
        Ok(self.current_epoch().safe_add(1)?)
    }

    /// Returns `true` if the state is in the genesis epoch.
    pub fn is_genesis_epoch(&self, spec: &ChainSpec) -> bool {
        self.current_epoch() == spec.genesis_slot.epoch(E::slots_per_epoch())
    }

    /// Returns the active validator indices for the given epoch.
    pub fn get_active_validator_indices(&self, epoch: Epoch) -> Vec<usize> {
        self.validators
            .iter()
            .enumerate()
            .filter_map(|(index, validator)| validator.is_active_at(epoch).then_some(index))
            .collect()
    }

    /// Return the number of committees at ``epoch``.
    pub fn get_committee_count_per_slot(
        &self,
        epoch: Epoch,
        spec: &ChainSpec,
    ) -> Result<u64, Error> {
        let active_validator_count = self.get_active_validator_indices(epoch).len();
        Ok(E::get_committee_count_per_slot(
            active_validator_count,
            spec,
        )?)
    }

    /// Compute the proposer (not necessarily for the Beacon chain) from a list of indices.
    ///
    /// Candidates whose effective balance does not exceed `min_effective_balance` are never
    /// selected. If no candidate is eligible, `Error::InsufficientValidators` is returned rather
    /// than sampling forever.
    pub fn compute_proposer_index(
        &self,
        indices: &[usize],
        seed: &[u8],
        min_effective_balance: Option<u64>,
        spec: &ChainSpec,
    ) -> Result<usize, Error> {
        if indices.is_empty() {
            return Err(Error::InsufficientValidators);
        }

        let is_eligible = |effective_balance: u64| {
            min_effective_balance.map_or(true, |min| effective_balance > min)
        };

        let mut any_eligible = false;
        for &index in indices {
            if is_eligible(self.get_effective_balance(index)?) {
                any_eligible = true;
                break;
            }
        }
        if !any_eligible {
            return Err(Error::InsufficientValidators);
        }

        let mut i = 0;
        loop {
            let shuffled_index = compute_shuffled_index(
                i.safe_rem(indices.len())?,
                indices.len(),
                seed,
                spec.shuffle_round_count,
            )
            .ok_or(Error::UnableToShuffle)?;
            let candidate_index = *indices
                .get(shuffled_index)
                .ok_or(Error::ShuffleIndexOutOfBounds(shuffled_index))?;
            let random_byte = Self::shuffling_random_byte(i, seed)?;
            let effective_balance = self.get_effective_balance(candidate_index)?;
            if is_eligible(effective_balance)
                && effective_balance.safe_mul(MAX_RANDOM_BYTE)?
                    >= spec
                        .max_effective_balance
                        .safe_mul(u64::from(random_byte))?
            {
                return Ok(candidate_index);
            }
            i.safe_add_assign(1)?;
        }
    }

    /// Get a random byte from the given `seed`.
    fn shuffling_random_byte(i: usize, seed: &[u8]) -> Result<u8, Error> {
        let mut preimage = seed.to_vec();
        preimage.extend_from_slice(&(i.safe_div(32)? as u64).to_le_bytes());
        let index = i.safe_rem(32)?;
        hash(&preimage)
            .get(index)
            .copied()
            .ok_or(Error::ShuffleIndexOutOfBounds(index))
    }

    /// Returns the beacon proposer index for the `slot` in `self.current_epoch()`.
    pub fn get_beacon_proposer_index(&self, slot: Slot, spec: &ChainSpec) -> Result<usize, Error> {
        // Proposer indices are only known for the current epoch, due to the dependence on the
        // effective balances of validators, which change at every epoch transition.
        let epoch = slot.epoch(E::slots_per_epoch());
        if epoch != self.current_epoch() {
            return Err(Error::SlotOutOfBounds);
        }

        let seed = self.get_proposer_seed(slot, spec)?;
        let indices = self.get_active_validator_indices(epoch);

        self.compute_proposer_index(&indices, seed.as_bytes(), None, spec)
    }

    /// Compute the seed to use for proposer selection at the given `slot`.
    ///
    /// Shared by beacon and shard proposers; the two differ in the candidate list only.
    pub fn get_proposer_seed(&self, slot: Slot, spec: &ChainSpec) -> Result<Hash256, Error> {
        let epoch = slot.epoch(E::slots_per_epoch());
        let mut preimage = self
            .get_seed(epoch, Domain::BeaconProposer, spec)?
            .as_bytes()
            .to_vec();
        preimage.extend_from_slice(&slot.as_u64().to_le_bytes());
        Ok(Hash256::from_slice(&hash(&preimage)))
    }

    /// Safely obtains the index for latest block roots, given some `slot`.
    fn get_latest_block_roots_index(&self, slot: Slot) -> Result<usize, Error> {
        if slot < self.slot() && self.slot() <= slot.safe_add(self.block_roots.len() as u64)? {
            Ok(slot.as_usize().safe_rem(self.block_roots.len())?)
        } else {
            Err(Error::SlotOutOfBounds)
        }
    }

    /// Return the block root at a recent `slot`.
    pub fn get_block_root(&self, slot: Slot) -> Result<&Hash256, Error> {
        let i = self.get_latest_block_roots_index(slot)?;
        self.block_roots
            .get(i)
            .ok_or(Error::BlockRootsOutOfBounds(i))
    }

    /// Sets the block root for some given slot.
    pub fn set_block_root(&mut self, slot: Slot, block_root: Hash256) -> Result<(), Error> {
        let i = self.get_latest_block_roots_index(slot)?;
        *self
            .block_roots
            .get_mut(i)
            .ok_or(Error::BlockRootsOutOfBounds(i))? = block_root;
        Ok(())
    }

    /// Generate a seed for the given `epoch`.
    pub fn get_seed(
        &self,
        epoch: Epoch,
        domain_type: Domain,
        spec: &ChainSpec,
    ) -> Result<Hash256, Error> {
        // Bypass the safe getter for RANDAO so we can gracefully handle the scenario where `epoch
        // == 0`.
        let mix = {
            let i = epoch
                .safe_add(E::EpochsPerHistoricalVector::to_u64())?
                .safe_sub(spec.min_seed_lookahead)?
                .safe_sub(1)?;
            let i_mod = i.as_usize().safe_rem(self.randao_mixes.len())?;
            self.randao_mixes
                .get(i_mod)
                .ok_or(Error::RandaoMixesOutOfBounds(i_mod))?
        };
        let domain_bytes = spec.get_domain_constant(domain_type).to_le_bytes();
        let epoch_bytes = epoch.as_u64().to_le_bytes();

        const NUM_DOMAIN_BYTES: usize = 4;
        const NUM_EPOCH_BYTES: usize = 8;
        const MIX_OFFSET: usize = NUM_DOMAIN_BYTES + NUM_EPOCH_BYTES;
        const NUM_MIX_BYTES: usize = 32;

        let mut preimage = [0; NUM_DOMAIN_BYTES + NUM_EPOCH_BYTES + NUM_MIX_BYTES];
        preimage[0..NUM_DOMAIN_BYTES].copy_from_slice(&domain_bytes);
        preimage[NUM_DOMAIN_BYTES..MIX_OFFSET].copy_from_slice(&epoch_bytes);
        preimage[MIX_OFFSET..].copy_from_slice(mix.as_bytes());

        Ok(Hash256::from_slice(&hash(&preimage)))
    }

    /// Safe indexer for the `validators` list.
    pub fn get_validator(&self, validator_index: usize) -> Result<&Validator, Error> {
        self.validators
            .get(validator_index)
            .ok_or(Error::UnknownValidator(validator_index))
    }

    /// Safe mutator for the `validators` list.
    pub fn get_validator_mut(&mut self, validator_index: usize) -> Result<&mut Validator, Error> {
        self.validators
            .get_mut(validator_index)
            .ok_or(Error::UnknownValidator(validator_index))
    }

    /// Return the effective balance for a validator with the given `validator_index`.
    pub fn get_effective_balance(&self, validator_index: usize) -> Result<u64, Error> {
        self.get_validator(validator_index)
            .map(|v| v.effective_balance)
    }

    /// Get the balance of a single validator.
    pub fn get_balance(&self, validator_index: usize) -> Result<u64, Error> {
        self.balances
            .get(validator_index)
            .copied()
            .ok_or(Error::BalancesOutOfBounds(validator_index))
    }

    /// Get a mutable reference to the balance of a single validator.
    pub fn get_balance_mut(&mut self, validator_index: usize) -> Result<&mut u64, Error> {
        self.balances
            .get_mut(validator_index)
            .ok_or(Error::BalancesOutOfBounds(validator_index))
    }

    /// Returns the summed effective balance of `validator_indices`, floored at one increment.
    ///
    /// Returns minimum `EFFECTIVE_BALANCE_INCREMENT`, to avoid div by 0.
    pub fn get_total_balance<'a, I: IntoIterator<Item = &'a usize>>(
        &'a self,
        validator_indices: I,
        spec: &ChainSpec,
    ) -> Result<u64, Error> {
        let total_balance = validator_indices.into_iter().try_fold(0_u64, |acc, i| {
            self.get_effective_balance(*i)
                .and_then(|bal| Ok(acc.safe_add(bal)?))
        })?;
        Ok(std::cmp::max(
            total_balance,
            spec.effective_balance_increment,
        ))
    }

    /// Get the total slashed balances for some epoch.
    pub fn get_slashings(&self, epoch: Epoch) -> Result<u64, Error> {
        let i = self.get_slashings_index(epoch)?;
        self.slashings
            .get(i)
            .copied()
            .ok_or(Error::SlashingsOutOfBounds(i))
    }

    /// Set the total slashed balances for some epoch.
    pub fn set_slashings(&mut self, epoch: Epoch, value: u64) -> Result<(), Error> {
        let i = self.get_slashings_index(epoch)?;
        *self
            .slashings
            .get_mut(i)
            .ok_or(Error::SlashingsOutOfBounds(i))? = value;
        Ok(())
    }

    fn get_slashings_index(&self, epoch: Epoch) -> Result<usize, Error> {
        Ok(epoch
            .as_usize()
            .safe_rem(E::EpochsPerSlashingsVector::to_usize())?)
    }

    /// Return the ledger of candidate shard headers for `epoch`.
    ///
    /// Only the current and previous epochs have a ledger.
    pub fn get_pending_shard_headers(
        &self,
        epoch: Epoch,
    ) -> Result<&PendingShardHeaders<E>, Error> {
        if epoch == self.current_epoch() {
            Ok(&self.current_epoch_pending_shard_headers)
        } else if epoch == self.previous_epoch() {
            Ok(&self.previous_epoch_pending_shard_headers)
        } else {
            Err(Error::EpochOutOfBounds)
        }
    }

    /// Mutable variant of `get_pending_shard_headers`.
    pub fn get_pending_shard_headers_mut(
        &mut self,
        epoch: Epoch,
    ) -> Result<&mut PendingShardHeaders<E>, Error> {
        if epoch == self.current_epoch() {
            Ok(&mut self.current_epoch_pending_shard_headers)
        } else if epoch == self.previous_epoch() {
            Ok(&mut self.previous_epoch_pending_shard_headers)
        } else {
            Err(Error::EpochOutOfBounds)
        }
    }

    /// Minimum effective balance a shard proposer must hold to cover the worst-case fee.
    pub fn shard_proposer_min_effective_balance(&self, spec: &ChainSpec) -> Result<u64, Error> {
        let increment = spec.effective_balance_increment;
        let max_downward_deviation = increment.safe_sub(
            increment
                .safe_mul(spec.hysteresis_downward_multiplier)?
                .safe_div(spec.hysteresis_quotient)?,
        )?;

        Ok(self
            .shard_gasprice
            .safe_mul(spec.max_samples_per_block)?
            .safe_div(spec.target_samples_per_block)?
            .safe_add(max_downward_deviation)?)
    }
}

impl From<ssz_types::Error> for Error {
    fn from(e: ssz_types::Error) -> Error {
        Error::SszTypesError(e)
    }
}

impl From<ArithError> for Error {
    fn from(e: ArithError) -> Error {
        Error::ArithError(e)
    }
}
