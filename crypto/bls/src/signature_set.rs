use crate::{Hash256, PublicKey, Signature};
use std::borrow::Cow;

/// A signature across a message by a single public key.
///
/// Building the set separately from verifying it lets callers decide whether (and when) to pay
/// for the pairing, mirroring how block processing defers signature checks.
#[derive(Clone, Debug)]
pub struct SignatureSet<'a> {
    pub signature: Cow<'a, Signature>,
    signing_key: Cow<'a, PublicKey>,
    message: Hash256,
}

impl<'a> SignatureSet<'a> {
    pub fn single_pubkey(
        signature: Cow<'a, Signature>,
        signing_key: Cow<'a, PublicKey>,
        message: Hash256,
    ) -> Self {
        Self {
            signature,
            signing_key,
            message,
        }
    }

    pub fn message(&self) -> Hash256 {
        self.message
    }

    /// Returns `true` if the signature is valid across `self.message` by `self.signing_key`.
    pub fn verify(&self) -> bool {
        self.signature.verify(&self.signing_key, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Keypair, SecretKey};
    use std::borrow::Cow;

    fn keypair(seed: u8) -> Keypair {
        let ikm = ethereum_hashing::hash(&[seed]);
        Keypair::from_secret_key(SecretKey::key_gen(&ikm).unwrap())
    }

    #[test]
    fn valid_signature_verifies() {
        let kp = keypair(1);
        let msg = Hash256::repeat_byte(42);
        let sig = kp.sk.sign(msg);

        let set = SignatureSet::single_pubkey(Cow::Borrowed(&sig), Cow::Borrowed(&kp.pk), msg);
        assert!(set.verify());
    }

    #[test]
    fn wrong_message_fails() {
        let kp = keypair(1);
        let sig = kp.sk.sign(Hash256::repeat_byte(1));

        assert!(!SignatureSet::single_pubkey(
            Cow::Owned(sig),
            Cow::Owned(kp.pk),
            Hash256::repeat_byte(2)
        )
        .verify());
    }

    #[test]
    fn wrong_key_fails() {
        let msg = Hash256::repeat_byte(7);
        let sig = keypair(1).sk.sign(msg);

        assert!(!sig.verify(&keypair(2).pk, msg));
    }

    #[test]
    fn pubkey_round_trips_through_compressed_bytes() {
        let kp = keypair(3);
        let bytes = kp.pk.serialize();

        assert_eq!(PublicKey::deserialize(&bytes).unwrap(), kp.pk);
    }

    #[test]
    fn infinity_pubkey_is_rejected() {
        assert_eq!(
            PublicKey::deserialize(&crate::INFINITY_PUBLIC_KEY),
            Err(crate::Error::InvalidInfinityPublicKey)
        );
    }

    #[test]
    fn short_signature_is_rejected() {
        assert_eq!(
            Signature::deserialize(&[0; 95]),
            Err(crate::Error::InvalidByteLength {
                got: 95,
                expected: crate::SIGNATURE_BYTES_LEN
            })
        );
    }
}
