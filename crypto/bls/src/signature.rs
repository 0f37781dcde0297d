use crate::{blst_core, Error, Hash256, PublicKey, DST};
use blst::BLST_ERROR;
use std::fmt;

/// The byte-length of a BLS signature when serialized in compressed form.
pub const SIGNATURE_BYTES_LEN: usize = 96;

/// A decompressed BLS signature.
#[derive(Clone)]
pub struct Signature {
    point: blst_core::Signature,
}

impl Signature {
    pub(crate) fn from_point(point: blst_core::Signature) -> Self {
        Self { point }
    }

    /// Serialize `self` as compressed bytes.
    pub fn serialize(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.point.compress()
    }

    /// Deserialize `self` from compressed bytes.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SIGNATURE_BYTES_LEN {
            return Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            });
        }
        blst_core::Signature::from_bytes(bytes)
            .map(Self::from_point)
            .map_err(Into::into)
    }

    /// Returns `true` if `self` is a signature across `msg` by `pubkey`.
    pub fn verify(&self, pubkey: &PublicKey, msg: Hash256) -> bool {
        self.point
            .verify(true, msg.as_bytes(), DST, &[], pubkey.point(), false)
            == BLST_ERROR::BLST_SUCCESS
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.serialize() == other.serialize()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.serialize()))
    }
}
