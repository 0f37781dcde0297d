use crate::*;

/// Builds a `ShardProposerSlashing`.
///
/// This struct should **never be used for production purposes.**
pub struct TestingShardProposerSlashingBuilder;

impl TestingShardProposerSlashingBuilder {
    /// Builds a `ShardProposerSlashing` where `proposer_index` signed two references with
    /// different body roots for the same slot and shard.
    pub fn double_proposal<E: EthSpec>(
        proposer_index: u64,
        slot: Slot,
        shard: u64,
        secret_key: &SecretKey,
        fork: &Fork,
        genesis_validators_root: Hash256,
        spec: &ChainSpec,
    ) -> ShardProposerSlashing {
        let reference_1 = ShardBlobReference {
            slot,
            shard,
            proposer_index,
            body_root: Hash256::from_low_u64_be(1),
        };
        let reference_2 = ShardBlobReference {
            body_root: Hash256::from_low_u64_be(2),
            ..reference_1.clone()
        };

        ShardProposerSlashing {
            signed_reference_1: Self::sign_reference::<E>(
                reference_1,
                secret_key,
                fork,
                genesis_validators_root,
                spec,
            ),
            signed_reference_2: Self::sign_reference::<E>(
                reference_2,
                secret_key,
                fork,
                genesis_validators_root,
                spec,
            ),
        }
    }

    /// Sign `reference` under the shard proposer domain of its own epoch.
    pub fn sign_reference<E: EthSpec>(
        reference: ShardBlobReference,
        secret_key: &SecretKey,
        fork: &Fork,
        genesis_validators_root: Hash256,
        spec: &ChainSpec,
    ) -> SignedShardBlobReference {
        let epoch = reference.slot.epoch(E::slots_per_epoch());
        let domain = spec.get_domain(
            epoch,
            Domain::ShardProposer,
            fork,
            genesis_validators_root,
        );
        let signature = secret_key.sign(reference.signing_root(domain));

        SignedShardBlobReference {
            message: reference,
            signature: SignatureBytes::from(signature.serialize().to_vec()),
        }
    }
}
