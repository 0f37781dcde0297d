//! BLS12-381 signatures as used by the shard proposer signing domain.
//!
//! This is a narrow wrapper around the `blst` "minimal public key" scheme: public keys live in G1
//! (48 bytes compressed), signatures in G2 (96 bytes compressed). Only single-signer verification
//! is required by shard header processing, so aggregation is deliberately absent.

mod keypair;
mod public_key;
mod secret_key;
mod signature;
mod signature_set;

pub use keypair::Keypair;
pub use public_key::{PublicKey, INFINITY_PUBLIC_KEY, PUBLIC_KEY_BYTES_LEN};
pub use secret_key::{SecretKey, SECRET_KEY_BYTES_LEN};
pub use signature::{Signature, SIGNATURE_BYTES_LEN};
pub use signature_set::SignatureSet;

use blst::BLST_ERROR;

pub use blst::min_pk as blst_core;

pub type Hash256 = ethereum_types::H256;

/// Domain separation tag for the proof-of-possession ciphersuite.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An error was raised from the underlying BLS library.
    BlstError(BLST_ERROR),
    /// The provided bytes were an incorrect length.
    InvalidByteLength { got: usize, expected: usize },
    /// The provided secret key bytes were an incorrect length.
    InvalidSecretKeyLength { got: usize, expected: usize },
    /// The public key represents the point at infinity, which is invalid.
    InvalidInfinityPublicKey,
}

impl From<BLST_ERROR> for Error {
    fn from(e: BLST_ERROR) -> Error {
        Error::BlstError(e)
    }
}
