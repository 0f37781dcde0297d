use crate::consts::sharding::G1_SETUP_0;
use crate::*;

/// Builds a `SignedShardBlobHeader` which is valid against some `BeaconState`.
///
/// This struct should **never be used for production purposes.**
pub struct TestingShardHeaderBuilder {
    header: ShardBlobHeader,
    signing_epoch: Epoch,
}

impl TestingShardHeaderBuilder {
    /// Create a header for `shard` at `slot`, with the proposer and beacon block root taken from
    /// `state` and an empty commitment. It is signed in the current epoch of `state`.
    pub fn new<E: EthSpec>(
        state: &BeaconState<E>,
        slot: Slot,
        shard: u64,
        spec: &ChainSpec,
    ) -> Result<Self, BeaconStateError> {
        let proposer_index = state.get_shard_proposer_index(slot, shard, spec)?;
        let beacon_block_root = *state.get_block_root(slot - 1)?;

        Ok(Self {
            header: ShardBlobHeader {
                slot,
                shard,
                proposer_index: proposer_index as u64,
                body_summary: ShardBlobBodySummary {
                    commitment: DataCommitment::default(),
                    degree_proof: BLSCommitment::from(G1_SETUP_0.to_vec()),
                    data_root: Hash256::zero(),
                    beacon_block_root,
                },
            },
            signing_epoch: state.current_epoch(),
        })
    }

    /// Sets the number of samples covered by the commitment.
    pub fn commitment_length(mut self, length: u64) -> Self {
        self.header.body_summary.commitment.length = length;
        self
    }

    /// Sets the data root, which distinguishes otherwise identical headers.
    pub fn data_root(mut self, data_root: Hash256) -> Self {
        self.header.body_summary.data_root = data_root;
        self
    }

    /// Sign under the fork version of `epoch` instead.
    pub fn signing_epoch(mut self, epoch: Epoch) -> Self {
        self.signing_epoch = epoch;
        self
    }

    /// Mutate the header before signing.
    pub fn modify(mut self, f: impl FnOnce(&mut ShardBlobHeader)) -> Self {
        f(&mut self.header);
        self
    }

    pub fn header(&self) -> &ShardBlobHeader {
        &self.header
    }

    /// Sign the header with `secret_key` under the shard proposer domain.
    pub fn build<E: EthSpec>(
        self,
        secret_key: &SecretKey,
        fork: &Fork,
        genesis_validators_root: Hash256,
        spec: &ChainSpec,
    ) -> SignedShardBlobHeader {
        let domain = spec.get_domain(
            self.signing_epoch,
            Domain::ShardProposer,
            fork,
            genesis_validators_root,
        );
        let signature = secret_key.sign(self.header.signing_root(domain));

        SignedShardBlobHeader {
            message: self.header,
            signature: SignatureBytes::from(signature.serialize().to_vec()),
        }
    }
}
