use crate::*;
use ethereum_hashing::hash;

/// Generates `validator_count` keypairs where the secret key is derived from the index of the
/// validator.
pub fn generate_deterministic_keypairs(validator_count: usize) -> Vec<Keypair> {
    (0..validator_count)
        .map(generate_deterministic_keypair)
        .collect()
}

/// Generates a single deterministic keypair, where the secret key is derived from
/// `validator_index`.
///
/// The key material is `hash(validator_index)`, which always satisfies the 32-byte minimum of
/// `KeyGen`.
pub fn generate_deterministic_keypair(validator_index: usize) -> Keypair {
    let ikm = hash(&(validator_index as u64).to_le_bytes());
    match SecretKey::key_gen(&ikm) {
        Ok(sk) => Keypair::from_secret_key(sk),
        Err(e) => panic!("deterministic key material is always 32 bytes: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypairs_are_deterministic_and_distinct() {
        let a = generate_deterministic_keypairs(4);
        let b = generate_deterministic_keypairs(4);

        assert_eq!(a.len(), 4);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.pk, y.pk);
        }
        assert_ne!(a[0].pk, a[1].pk);
    }
}
