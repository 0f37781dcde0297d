use crate::{blst_core, Error, Hash256, PublicKey, Signature, DST};

/// The byte-length of a BLS secret key.
pub const SECRET_KEY_BYTES_LEN: usize = 32;

/// A BLS secret key.
///
/// Does not implement `Debug`, `Display` or any serialization.
#[derive(Clone)]
pub struct SecretKey {
    point: blst_core::SecretKey,
}

impl SecretKey {
    /// Derive a secret key from some input key material, as per EIP-2333 `KeyGen`.
    ///
    /// `ikm` must be at least 32 bytes.
    pub fn key_gen(ikm: &[u8]) -> Result<Self, Error> {
        if ikm.len() < SECRET_KEY_BYTES_LEN {
            return Err(Error::InvalidSecretKeyLength {
                got: ikm.len(),
                expected: SECRET_KEY_BYTES_LEN,
            });
        }
        blst_core::SecretKey::key_gen(ikm, &[])
            .map(|point| Self { point })
            .map_err(Into::into)
    }

    /// Returns the public key that corresponds to self.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(self.point.sk_to_pk())
    }

    /// Signs `msg`.
    pub fn sign(&self, msg: Hash256) -> Signature {
        Signature::from_point(self.point.sign(msg.as_bytes(), DST, &[]))
    }
}
