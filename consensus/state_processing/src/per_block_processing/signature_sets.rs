//! A `SignatureSet` is an abstraction over the components of a signature. A `SignatureSet` may be
//! validated individually, or alongside in others in a potentially cheaper bulk operation.
//!
//! This module exposes one function to extract each type of `SignatureSet` from a shard operation.
use bls::SignatureSet;
use std::borrow::Cow;
use types::{
    BeaconState, ChainSpec, Domain, EthSpec, PublicKey, Signature, SignatureBytes, SignedRoot,
    SignedShardBlobHeader, SignedShardBlobReference,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The signature bytes could not be decoded. The operation is invalid.
    SignatureInvalid(bls::Error),
    /// Attempted to find the public key of a validator that does not exist. You cannot distinguish
    /// between an error and an invalid block in this case.
    ValidatorUnknown(u64),
}

/// Helper function to get a public key from a `state`.
pub fn get_pubkey_from_state<E>(
    state: &BeaconState<E>,
    validator_index: usize,
) -> Option<Cow<PublicKey>>
where
    E: EthSpec,
{
    state
        .validators
        .get(validator_index)
        .and_then(|v| PublicKey::deserialize(&v.pubkey[..]).ok())
        .map(Cow::Owned)
}

fn decompress_signature(signature: &SignatureBytes) -> Result<Signature> {
    Signature::deserialize(&signature[..]).map_err(Error::SignatureInvalid)
}

/// A signature set that is valid if a shard header was signed by its claimed proposer in the
/// current epoch of `state`.
pub fn shard_header_signature_set<'a, E, F>(
    state: &'a BeaconState<E>,
    get_pubkey: F,
    signed_header: &'a SignedShardBlobHeader,
    spec: &'a ChainSpec,
) -> Result<SignatureSet<'a>>
where
    E: EthSpec,
    F: Fn(usize) -> Option<Cow<'a, PublicKey>>,
{
    let header = &signed_header.message;
    let proposer_index = header.proposer_index;

    let domain = spec.get_domain(
        state.current_epoch(),
        Domain::ShardProposer,
        &state.fork,
        state.genesis_validators_root,
    );
    let message = header.signing_root(domain);

    Ok(SignatureSet::single_pubkey(
        Cow::Owned(decompress_signature(&signed_header.signature)?),
        get_pubkey(proposer_index as usize).ok_or(Error::ValidatorUnknown(proposer_index))?,
        message,
    ))
}

/// Returns the signature set for the given `signed_reference`, signed in the epoch of its own
/// slot.
pub fn shard_reference_signature_set<'a, E, F>(
    state: &'a BeaconState<E>,
    get_pubkey: F,
    signed_reference: &'a SignedShardBlobReference,
    spec: &'a ChainSpec,
) -> Result<SignatureSet<'a>>
where
    E: EthSpec,
    F: Fn(usize) -> Option<Cow<'a, PublicKey>>,
{
    let reference = &signed_reference.message;
    let proposer_index = reference.proposer_index;

    let domain = spec.get_domain(
        reference.slot.epoch(E::slots_per_epoch()),
        Domain::ShardProposer,
        &state.fork,
        state.genesis_validators_root,
    );
    let message = reference.signing_root(domain);

    Ok(SignatureSet::single_pubkey(
        Cow::Owned(decompress_signature(&signed_reference.signature)?),
        get_pubkey(proposer_index as usize).ok_or(Error::ValidatorUnknown(proposer_index))?,
        message,
    ))
}
