use super::generate_deterministic_keypairs;
use crate::*;
use ssz_types::FixedVector;

/// Builds a beacon state to be used for testing purposes.
///
/// Every validator is active from genesis with the maximum effective balance and a keypair
/// derived from its index.
///
/// This struct should **never be used for production purposes.**
pub struct TestingBeaconStateBuilder<E: EthSpec> {
    state: BeaconState<E>,
    keypairs: Vec<Keypair>,
}

impl<E: EthSpec> TestingBeaconStateBuilder<E> {
    /// Create a state with `validator_count` validators using deterministic keypairs.
    pub fn from_deterministic_keypairs(validator_count: usize, spec: &ChainSpec) -> Self {
        Self::from_keypairs(generate_deterministic_keypairs(validator_count), spec)
    }

    /// Create a state with one validator per keypair.
    pub fn from_keypairs(keypairs: Vec<Keypair>, spec: &ChainSpec) -> Self {
        let mut state = BeaconState::new(Hash256::repeat_byte(0x42), spec);

        let validators = keypairs
            .iter()
            .map(|keypair| Validator {
                pubkey: PublicKeyBytes::from(keypair.pk.serialize().to_vec()),
                withdrawal_credentials: Hash256::zero(),
                effective_balance: spec.max_effective_balance,
                slashed: false,
                activation_eligibility_epoch: Epoch::new(0),
                activation_epoch: Epoch::new(0),
                exit_epoch: spec.far_future_epoch,
                withdrawable_epoch: spec.far_future_epoch,
            })
            .collect::<Vec<_>>();
        let balances = vec![spec.max_effective_balance; validators.len()];

        state.validators = VariableList::new(validators).expect("registry limit is large");
        state.balances = VariableList::new(balances).expect("registry limit is large");

        // Distinct, non-zero roots make it obvious when the wrong slot is read.
        state.block_roots = FixedVector::from(
            (0..E::slots_per_historical_root())
                .map(|i| Hash256::from_low_u64_be(i as u64 + 1))
                .collect::<Vec<_>>(),
        );
        state.randao_mixes = FixedVector::from(
            (0..E::epochs_per_historical_vector())
                .map(|i| Hash256::from_low_u64_le(i as u64 + 1))
                .collect::<Vec<_>>(),
        );

        Self { state, keypairs }
    }

    /// Sets the state slot, without running any intermediate state transitions.
    pub fn teleport_to_slot(&mut self, slot: Slot) -> &mut Self {
        self.state.slot = slot;
        self
    }

    /// Sets the shard gas price.
    pub fn set_shard_gasprice(&mut self, gasprice: u64) -> &mut Self {
        self.state.shard_gasprice = gasprice;
        self
    }

    pub fn keypairs(&self) -> &[Keypair] {
        &self.keypairs
    }

    /// Consume the builder and return the `BeaconState` and the keypairs for each validator.
    pub fn build(self) -> (BeaconState<E>, Vec<Keypair>) {
        (self.state, self.keypairs)
    }
}
