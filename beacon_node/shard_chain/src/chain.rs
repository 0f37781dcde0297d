use crate::config::ShardChainConfig;
use crate::errors::Error;
use crate::metrics;
use slog::{debug, info, warn, Logger};
use state_processing::{
    per_slot_processing, process_shard_operations, EpochProcessingSummary, VerifySignatures,
};
use tree_hash::TreeHash;
use types::{BeaconBlockBody, BeaconState, ChainSpec, EthSpec, Hash256, Slot};

/// Applies the shard operations of beacon blocks to a `BeaconState` and advances it through
/// slots, running shard epoch processing at each epoch boundary.
///
/// A block or slot which fails to process leaves the state as it was.
pub struct ShardChain<E: EthSpec> {
    state: BeaconState<E>,
    spec: ChainSpec,
    /// Root of the latest block applied, recorded against the current slot when it ends.
    head_block_root: Hash256,
    log: Logger,
}

impl<E: EthSpec> ShardChain<E> {
    pub fn new(state: BeaconState<E>, spec: ChainSpec, log: Logger) -> Self {
        let head_block_root = state
            .slot()
            .as_u64()
            .checked_sub(1)
            .and_then(|slot| state.get_block_root(Slot::new(slot)).ok())
            .copied()
            .unwrap_or_else(Hash256::zero);

        Self {
            state,
            spec,
            head_block_root,
            log,
        }
    }

    /// Instantiate a chain with the `ChainSpec` described by `config`.
    pub fn from_config(
        state: BeaconState<E>,
        config: &ShardChainConfig,
        log: Logger,
    ) -> Result<Self, Error> {
        if config.preset_base != E::spec_name() {
            return Err(Error::InconsistentPreset {
                config: config.preset_base,
                chain: E::spec_name(),
            });
        }

        Ok(Self::new(state, config.apply_to_chain_spec(), log))
    }

    pub fn head_state(&self) -> &BeaconState<E> {
        &self.state
    }

    pub fn head_block_root(&self) -> Hash256 {
        self.head_block_root
    }

    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }

    /// Apply the shard operations of `body` at the current slot.
    ///
    /// Returns the root of `body`, which becomes the head block root.
    pub fn process_block(&mut self, body: &BeaconBlockBody<E>) -> Result<Hash256, Error> {
        metrics::inc_counter(&metrics::BLOCK_PROCESSING_REQUESTS);
        let timer = metrics::start_timer(&metrics::BLOCK_PROCESSING_TIMES);

        let mut state = self.state.clone();
        if let Err(e) =
            process_shard_operations(&mut state, body, VerifySignatures::True, &self.spec)
        {
            warn!(
                self.log,
                "Rejected block";
                "slot" => self.state.slot().as_u64(),
                "error" => ?e,
            );
            return Err(e.into());
        }

        let block_root = body.tree_hash_root();
        self.state = state;
        self.head_block_root = block_root;

        metrics::inc_counter(&metrics::BLOCK_PROCESSING_SUCCESSES);
        metrics::inc_counter_by(
            &metrics::SHARD_HEADERS_PROCESSED,
            body.shard_headers().len() as u64,
        );
        metrics::stop_timer(timer);

        debug!(
            self.log,
            "Processed block";
            "slot" => self.state.slot().as_u64(),
            "block_root" => ?block_root,
            "shard_proposer_slashings" => body.shard_proposer_slashings().len(),
            "shard_headers" => body.shard_headers().len(),
            "attestations" => body.attestations().len(),
        );

        Ok(block_root)
    }

    /// Advance the head state by one slot.
    ///
    /// Returns a summary when the slot closed an epoch.
    pub fn per_slot_processing(&mut self) -> Result<Option<EpochProcessingSummary>, Error> {
        let mut state = self.state.clone();
        let timer = metrics::start_timer(&metrics::SHARD_EPOCH_PROCESSING_TIMES);
        let summary = per_slot_processing(&mut state, self.head_block_root, &self.spec)?;
        self.state = state;

        if let Some(summary) = summary {
            metrics::stop_timer(timer);
            metrics::inc_counter_by(
                &metrics::SHARD_HEADERS_CONFIRMED,
                summary.confirmed_headers as u64,
            );
            metrics::set_gauge(
                &metrics::SHARD_GASPRICE,
                i64::try_from(summary.gasprice_after).unwrap_or(i64::MAX),
            );

            info!(
                self.log,
                "Processed shard epoch";
                "epoch" => self.state.previous_epoch().as_u64(),
                "confirmed_headers" => summary.confirmed_headers,
                "voted_confirmations" => summary.voted_confirmations(),
                "fees_charged" => summary.fees_charged,
                "gasprice" => summary.gasprice_after,
                "start_shard" => summary.start_shard,
            );
        } else if let Some(timer) = timer {
            timer.stop_and_discard();
        }

        debug!(self.log, "Advanced slot"; "slot" => self.state.slot().as_u64());

        Ok(summary)
    }
}
