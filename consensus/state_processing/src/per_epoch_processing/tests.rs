#![cfg(test)]
use crate::common::compute_updated_gasprice;
use crate::per_block_processing::{process_shard_header, update_pending_votes, VerifySignatures};
use crate::per_epoch_processing::*;
use crate::{per_slot_processing, EpochProcessingError, SlotProcessingError};
use tree_hash::TreeHash;
use types::test_utils::{TestingBeaconStateBuilder, TestingShardHeaderBuilder};
use types::*;

type E = MinimalEthSpec;

pub const VALIDATOR_COUNT: usize = 32;

/// A state at the last slot of epoch 2, whose ledger was seeded when epoch 1 closed.
fn get_state(gasprice: u64, spec: &ChainSpec) -> (BeaconState<E>, Vec<Keypair>) {
    let mut builder =
        TestingBeaconStateBuilder::<E>::from_deterministic_keypairs(VALIDATOR_COUNT, spec);
    builder
        .teleport_to_slot(Slot::new(15))
        .set_shard_gasprice(gasprice);
    let (mut state, keypairs) = builder.build();

    reset_pending_headers(&mut state, spec).unwrap();
    process_shard_epoch_increment(&mut state, spec).unwrap();
    state.slot = Slot::new(23);

    (state, keypairs)
}

fn shard_at(state: &BeaconState<E>, slot: u64, spec: &ChainSpec) -> u64 {
    state
        .compute_shard_from_committee_index(Slot::new(slot), 0, spec)
        .unwrap()
}

/// Include a header for `slot` and return its root.
fn add_header(
    state: &mut BeaconState<E>,
    keypairs: &[Keypair],
    slot: u64,
    data_root: u64,
    length: u64,
    spec: &ChainSpec,
) -> Hash256 {
    let shard = shard_at(state, slot, spec);
    let builder = TestingShardHeaderBuilder::new(state, Slot::new(slot), shard, spec)
        .unwrap()
        .data_root(Hash256::from_low_u64_be(data_root))
        .commitment_length(length);
    let proposer_index = builder.header().proposer_index as usize;
    let signed_header = builder.build::<E>(
        &keypairs[proposer_index].sk,
        &state.fork,
        state.genesis_validators_root,
        spec,
    );
    process_shard_header(state, &signed_header, VerifySignatures::True, spec).unwrap();
    signed_header.message.tree_hash_root()
}

fn vote(state: &mut BeaconState<E>, slot: u64, root: Hash256, bits: &[bool], spec: &ChainSpec) {
    let mut aggregation_bits = BitList::with_capacity(bits.len()).unwrap();
    for (i, bit) in bits.iter().enumerate() {
        aggregation_bits.set(i, *bit).unwrap();
    }
    let attestation = Attestation::<E> {
        aggregation_bits,
        data: AttestationData {
            slot: Slot::new(slot),
            index: 0,
            shard_header_root: root,
            ..AttestationData::default()
        },
        signature: SignatureBytes::from(vec![0; 96]),
    };
    update_pending_votes(state, &attestation, spec).unwrap();
}

fn previous_header(state: &BeaconState<E>, slot: u64, root: Hash256) -> &PendingShardHeader<E> {
    state
        .previous_epoch_pending_shard_headers
        .iter()
        .find(|header| header.slot == Slot::new(slot) && header.root == root)
        .unwrap()
}

#[test]
fn reset_seeds_empty_headers_for_next_epoch() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    add_header(&mut state, &keypairs, 22, 1, 0, &spec);
    let closing_ledger = state.current_epoch_pending_shard_headers.clone();

    reset_pending_headers(&mut state, &spec).unwrap();

    assert_eq!(state.previous_epoch_pending_shard_headers, closing_ledger);

    let seeded = &state.current_epoch_pending_shard_headers;
    assert_eq!(seeded.len(), E::slots_per_epoch() as usize);
    for (header, slot) in seeded.iter().zip(24..32) {
        assert_eq!(header.slot, Slot::new(slot));
        assert_eq!(header.shard, shard_at(&state, slot, &spec));
        assert!(header.is_empty_header());
        assert_eq!(header.commitment, DataCommitment::default());
        assert_eq!(header.votes.len(), spec.target_committee_size);
        assert!(!header.confirmed);
    }
}

#[test]
fn unattested_epoch_confirms_empty_headers() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    let root = add_header(&mut state, &keypairs, 19, 1, 0, &spec);

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(summary.swept_confirmations, 8);
    assert_eq!(summary.confirmed_headers, 8);
    assert!(!previous_header(&state, 19, root).confirmed);
    assert!(state
        .previous_epoch_pending_shard_headers
        .iter()
        .filter(|header| header.is_empty_header())
        .all(|header| header.confirmed));
}

/// Rewrite the current-epoch ledger before it is swept.
fn edit_ledger(
    state: &mut BeaconState<E>,
    edit: impl FnOnce(&mut Vec<PendingShardHeader<E>>),
) {
    let mut headers = state.current_epoch_pending_shard_headers.to_vec();
    edit(&mut headers);
    state.current_epoch_pending_shard_headers = VariableList::new(headers).unwrap();
}

#[test]
fn unattested_pair_prefers_empty_header_over_earlier_candidate() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    let root = add_header(&mut state, &keypairs, 19, 1, 0, &spec);

    // Move the real header ahead of the empty header for the same slot and shard.
    edit_ledger(&mut state, |headers| {
        let real = headers.iter().position(|h| h.root == root).unwrap();
        let header = headers.remove(real);
        let empty = headers
            .iter()
            .position(|h| h.slot == Slot::new(19) && h.is_empty_header())
            .unwrap();
        headers.insert(empty, header);
    });

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(summary.swept_confirmations, 8);
    assert!(!previous_header(&state, 19, root).confirmed);
    assert!(previous_header(&state, 19, Hash256::zero()).confirmed);
}

#[test]
fn unattested_pair_without_empty_header_confirms_nothing() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    let root = add_header(&mut state, &keypairs, 19, 1, 0, &spec);

    edit_ledger(&mut state, |headers| {
        headers.retain(|h| !(h.slot == Slot::new(19) && h.is_empty_header()))
    });

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(summary.swept_confirmations, 7);
    assert_eq!(summary.confirmed_headers, 7);
    assert!(!previous_header(&state, 19, root).confirmed);
    assert!(state
        .previous_epoch_pending_shard_headers
        .iter()
        .filter(|header| header.slot == Slot::new(19))
        .all(|header| !header.confirmed));
}

#[test]
fn highest_attested_header_wins() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    let root_a = add_header(&mut state, &keypairs, 19, 1, 0, &spec);
    let root_b = add_header(&mut state, &keypairs, 19, 2, 0, &spec);
    let root_c = add_header(&mut state, &keypairs, 18, 3, 0, &spec);

    vote(&mut state, 19, root_a, &[true, false, false, false], &spec);
    vote(&mut state, 19, root_b, &[false, true, true, false], &spec);
    vote(&mut state, 18, root_c, &[true, true, true, false], &spec);

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(summary.confirmed_headers, 8);
    assert_eq!(summary.swept_confirmations, 7);
    assert_eq!(summary.voted_confirmations(), 1);

    assert!(!previous_header(&state, 19, root_a).confirmed);
    assert!(previous_header(&state, 19, root_b).confirmed);
    assert!(!previous_header(&state, 19, Hash256::zero()).confirmed);
    assert!(previous_header(&state, 18, root_c).confirmed);
    assert!(!previous_header(&state, 18, Hash256::zero()).confirmed);
}

#[test]
fn tie_goes_to_earliest_header() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    let root_a = add_header(&mut state, &keypairs, 19, 1, 0, &spec);
    let root_b = add_header(&mut state, &keypairs, 19, 2, 0, &spec);

    vote(&mut state, 19, root_b, &[true, false, false, false], &spec);
    vote(&mut state, 19, root_a, &[false, true, false, false], &spec);

    process_shard_epoch(&mut state, &spec).unwrap();

    assert!(previous_header(&state, 19, root_a).confirmed);
    assert!(!previous_header(&state, 19, root_b).confirmed);
}

#[test]
fn genesis_epoch_confirms_nothing() {
    let spec = E::default_spec();
    let mut builder =
        TestingBeaconStateBuilder::<E>::from_deterministic_keypairs(VALIDATOR_COUNT, &spec);
    builder.teleport_to_slot(Slot::new(7));
    let (mut state, _) = builder.build();
    let gasprice = state.shard_gasprice;

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(summary.confirmed_headers, 0);
    assert_eq!(summary.fees_charged, 0);
    assert_eq!(summary.gasprice_after, gasprice);
    assert_eq!(state.current_epoch_pending_shard_headers.len(), 8);
}

#[test]
fn confirmed_headers_are_charged() {
    let spec = E::default_spec();
    let gasprice = 10_240;
    let (mut state, keypairs) = get_state(gasprice, &spec);
    let root = add_header(&mut state, &keypairs, 18, 1, 512, &spec);
    vote(&mut state, 18, root, &[true, true, true, true], &spec);

    let proposer_index = state
        .get_shard_proposer_index(Slot::new(18), shard_at(&state, 18, &spec), &spec)
        .unwrap();
    let balance_before = state.get_balance(proposer_index).unwrap();

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    let fee = gasprice * 512 / spec.target_samples_per_block;
    assert_eq!(summary.fees_charged, fee);
    assert_eq!(state.get_balance(proposer_index), Ok(balance_before - fee));

    // Seven empty headers, then the charged header, in ledger order.
    let quotient = 2 * E::slots_per_epoch() * spec.gasprice_adjustment_coefficient;
    let mut expected = gasprice;
    for _ in 0..7 {
        expected = compute_updated_gasprice(expected, 0, quotient, &spec).unwrap();
    }
    expected = compute_updated_gasprice(expected, 512, quotient, &spec).unwrap();

    assert_eq!(summary.gasprice_before, gasprice);
    assert_eq!(summary.gasprice_after, expected);
    assert_eq!(state.shard_gasprice, expected);
    assert!(expected < gasprice);
}

#[test]
fn fee_larger_than_balance_empties_it() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(10_240, &spec);
    let root = add_header(&mut state, &keypairs, 18, 1, 2_048, &spec);
    vote(&mut state, 18, root, &[true, true, true, true], &spec);

    let proposer_index = state
        .get_shard_proposer_index(Slot::new(18), shard_at(&state, 18, &spec), &spec)
        .unwrap();
    *state.get_balance_mut(proposer_index).unwrap() = 100;

    process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(state.get_balance(proposer_index), Ok(0));
}

#[test]
fn start_shard_advances_to_next_epoch() {
    let spec = E::default_spec();
    let (mut state, _) = get_state(spec.min_gasprice, &spec);
    let expected = state.get_start_shard(Slot::new(24), &spec).unwrap();

    let summary = process_shard_epoch(&mut state, &spec).unwrap();

    assert_eq!(summary.start_shard, expected);
    assert_eq!(state.current_epoch_start_shard, expected);
}

#[test]
fn slot_processing_crosses_epoch_boundary() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    state.slot = Slot::new(22);

    let root_22 = Hash256::repeat_byte(22);
    let root_23 = Hash256::repeat_byte(23);
    assert_eq!(per_slot_processing(&mut state, root_22, &spec), Ok(None));
    assert_eq!(state.get_block_root(Slot::new(22)), Ok(&root_22));

    let summary = per_slot_processing(&mut state, root_23, &spec).unwrap();
    assert!(summary.is_some());
    assert_eq!(state.slot(), Slot::new(24));
    assert_eq!(state.current_epoch(), Epoch::new(3));
    assert_eq!(state.get_block_root(Slot::new(23)), Ok(&root_23));

    // The new epoch's headers build on the block root recorded at the boundary.
    let root = add_header(&mut state, &keypairs, 24, 1, 0, &spec);
    assert!(state
        .current_epoch_pending_shard_headers
        .iter()
        .any(|header| header.root == root));
}

#[test]
fn late_headers_are_discarded() {
    let spec = E::default_spec();
    let (mut state, keypairs) = get_state(spec.min_gasprice, &spec);
    per_slot_processing(&mut state, Hash256::repeat_byte(23), &spec).unwrap();

    // Included during epoch 3 for a slot of epoch 2, after that epoch was swept.
    let late_root = add_header(&mut state, &keypairs, 20, 1, 0, &spec);
    assert!(!previous_header(&state, 20, late_root).confirmed);

    for slot in 24..32 {
        per_slot_processing(&mut state, Hash256::repeat_byte(slot as u8), &spec).unwrap();
    }

    assert_eq!(state.current_epoch(), Epoch::new(4));
    assert!(state
        .previous_epoch_pending_shard_headers
        .iter()
        .chain(state.current_epoch_pending_shard_headers.iter())
        .all(|header| header.root != late_root));
}

#[test]
fn empty_shard_committee_fails_the_epoch_transition() {
    let spec = E::default_spec();
    let mut builder = TestingBeaconStateBuilder::<E>::from_deterministic_keypairs(1, &spec);
    builder.teleport_to_slot(Slot::new(7));
    let (mut state, _) = builder.build();

    for slot in 7..15 {
        per_slot_processing(&mut state, Hash256::repeat_byte(slot as u8), &spec).unwrap();
    }

    // A lone validator leaves one of the two shard committees empty. The empty header swept for
    // that shard still resolves a proposer, so epoch 1 can never close.
    let result = per_slot_processing(&mut state, Hash256::repeat_byte(15), &spec);
    assert!(
        matches!(
            result,
            Err(SlotProcessingError::EpochProcessingError(
                EpochProcessingError::BeaconStateError(BeaconStateError::InsufficientCommittee {
                    ..
                })
            ))
        ),
        "{:?}",
        result
    );
}
