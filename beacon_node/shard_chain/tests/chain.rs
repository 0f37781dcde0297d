use shard_chain::{Error, ShardChain, ShardChainConfig};
use slog::Logger;
use sloggers::{null::NullLoggerBuilder, Build};
use state_processing::BlockProcessingError;
use tempfile::tempdir;
use tree_hash::TreeHash;
use types::test_utils::{TestingBeaconStateBuilder, TestingShardHeaderBuilder};
use types::*;

type E = MinimalEthSpec;

const VALIDATOR_COUNT: usize = 32;

fn null_logger() -> Logger {
    NullLoggerBuilder.build().expect("should build null logger")
}

/// A chain in the middle of epoch 2.
fn get_chain() -> (ShardChain<E>, Vec<Keypair>) {
    let spec = E::default_spec();
    let mut builder =
        TestingBeaconStateBuilder::<E>::from_deterministic_keypairs(VALIDATOR_COUNT, &spec);
    builder.teleport_to_slot(Slot::new(20));
    let (state, keypairs) = builder.build();
    (ShardChain::new(state, spec, null_logger()), keypairs)
}

fn header_at_current_slot(chain: &ShardChain<E>, keypairs: &[Keypair]) -> SignedShardBlobHeader {
    let state = chain.head_state();
    let spec = chain.spec();
    let slot = state.slot();
    let shard = state
        .compute_shard_from_committee_index(slot, 0, spec)
        .unwrap();
    let builder = TestingShardHeaderBuilder::new(state, slot, shard, spec)
        .unwrap()
        .data_root(Hash256::repeat_byte(1));
    let proposer_index = builder.header().proposer_index as usize;
    builder.build::<E>(
        &keypairs[proposer_index].sk,
        &state.fork,
        state.genesis_validators_root,
        spec,
    )
}

fn attestation(slot: Slot, root: Hash256) -> Attestation<E> {
    let mut aggregation_bits = BitList::with_capacity(4).unwrap();
    for i in 0..4 {
        aggregation_bits.set(i, true).unwrap();
    }
    Attestation {
        aggregation_bits,
        data: AttestationData {
            slot,
            index: 0,
            shard_header_root: root,
            ..AttestationData::default()
        },
        signature: SignatureBytes::from(vec![0; 96]),
    }
}

#[test]
fn header_is_confirmed_across_epoch_boundary() {
    let (mut chain, keypairs) = get_chain();

    let signed_header = header_at_current_slot(&chain, &keypairs);
    let header_slot = signed_header.message.slot;
    let header_root = signed_header.message.tree_hash_root();
    let body = BeaconBlockBody::from(BeaconBlockBodySharding {
        shard_headers: VariableList::new(vec![signed_header]).unwrap(),
        ..BeaconBlockBodySharding::default()
    });
    let block_root = chain.process_block(&body).unwrap();
    assert_eq!(chain.head_block_root(), block_root);

    assert_eq!(chain.per_slot_processing().unwrap(), None);
    assert_eq!(
        chain.head_state().get_block_root(header_slot),
        Ok(&block_root)
    );

    let votes = BeaconBlockBody::from(BeaconBlockBodySharding {
        attestations: VariableList::new(vec![attestation(header_slot, header_root)]).unwrap(),
        ..BeaconBlockBodySharding::default()
    });
    chain.process_block(&votes).unwrap();

    // Slots 21 and 22 pass quietly, slot 23 closes epoch 2.
    assert_eq!(chain.per_slot_processing().unwrap(), None);
    assert_eq!(chain.per_slot_processing().unwrap(), None);
    let summary = chain
        .per_slot_processing()
        .unwrap()
        .expect("slot 23 closes the epoch");

    assert_eq!(chain.head_state().slot(), Slot::new(24));
    assert_eq!(summary.voted_confirmations(), 1);
    assert!(chain
        .head_state()
        .previous_epoch_pending_shard_headers
        .iter()
        .any(|header| header.root == header_root && header.confirmed));
}

#[test]
fn rejected_block_leaves_state_untouched() {
    let (mut chain, keypairs) = get_chain();
    let head_block_root = chain.head_block_root();

    let signed_header = header_at_current_slot(&chain, &keypairs);
    let body = BeaconBlockBody::from(BeaconBlockBodySharding {
        shard_headers: VariableList::new(vec![signed_header.clone(), signed_header]).unwrap(),
        ..BeaconBlockBodySharding::default()
    });
    let before = chain.head_state().clone();

    assert!(matches!(
        chain.process_block(&body),
        Err(Error::BlockProcessingError(
            BlockProcessingError::ShardHeaderInvalid { index: 1, .. }
        ))
    ));
    assert_eq!(chain.head_state(), &before);
    assert_eq!(chain.head_block_root(), head_block_root);
}

#[test]
fn config_round_trips_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let config = ShardChainConfig {
        min_gasprice: 16,
        ..ShardChainConfig::from_chain_spec(&ChainSpec::minimal(), EthSpecId::Minimal)
    };

    config.to_file(&path).unwrap();
    assert_eq!(ShardChainConfig::from_file(&path).unwrap(), config);

    let state = BeaconState::<E>::new(Hash256::zero(), &ChainSpec::minimal());
    let chain = ShardChain::from_config(state, &config, null_logger()).unwrap();
    assert_eq!(chain.spec().min_gasprice, 16);
}

#[test]
fn config_for_another_preset_is_rejected() {
    let state = BeaconState::<E>::new(Hash256::zero(), &ChainSpec::minimal());

    assert!(matches!(
        ShardChain::from_config(state, &ShardChainConfig::default(), null_logger()),
        Err(Error::InconsistentPreset {
            config: EthSpecId::Mainnet,
            chain: EthSpecId::Minimal,
        })
    ));
}

#[test]
fn missing_config_file() {
    let dir = tempdir().unwrap();

    assert!(matches!(
        ShardChainConfig::from_file(dir.path().join("missing.yaml")),
        Err(Error::UnableToOpenFile(_))
    ));
}
