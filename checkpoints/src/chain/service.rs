//! Checkpoint enforcement over the set selected by configuration.

use crate::chain::progress::guess_verification_progress;
use crate::chain::{Checkpoint, CheckpointSet};
use crate::config::CheckpointConfig;
use crate::error::{CheckpointError, CheckpointResult};
use crate::types::{BlockHash, BlockIndex, ChainBlock, CoreBlockHeight};

/// Answers checkpoint queries for the block acceptance, reorg and telemetry paths.
///
/// The service is immutable once built and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct CheckpointService {
    checkpoints: CheckpointSet,
    enabled: bool,
    verification_factor: f64,
}

impl CheckpointService {
    /// Builds the service for the network named in `config`.
    ///
    /// Fails on an invalid configuration or a malformed compiled-in table; both are
    /// startup errors and the node should refuse to run.
    pub fn new(config: &CheckpointConfig) -> CheckpointResult<Self> {
        config.validate().map_err(CheckpointError::Config)?;

        let checkpoints = CheckpointSet::for_network(config.network)?;
        Self::with_checkpoints(checkpoints, config)
    }

    /// Builds the service over an explicit set, ignoring `config.network`.
    ///
    /// `config.tx_per_day_override`, when set, replaces the set's own rate.
    pub fn with_checkpoints(
        mut checkpoints: CheckpointSet,
        config: &CheckpointConfig,
    ) -> CheckpointResult<Self> {
        config.validate().map_err(CheckpointError::Config)?;

        if let Some(tx_per_day) = config.tx_per_day_override {
            checkpoints = checkpoints.with_tx_per_day(tx_per_day);
        }

        if !config.enable_checkpoints {
            tracing::warn!(network = %checkpoints.network(), "Checkpoint enforcement is disabled");
        } else if checkpoints.is_placeholder_only() {
            tracing::info!(
                network = %checkpoints.network(),
                "No checkpoints are defined for this network, all block hashes are accepted"
            );
        } else {
            tracing::info!(
                network = %checkpoints.network(),
                count = checkpoints.len(),
                highest = checkpoints.last_checkpoint().height,
                "Loaded checkpoints"
            );
        }

        Ok(Self {
            checkpoints,
            enabled: config.enable_checkpoints,
            verification_factor: config.verification_factor,
        })
    }

    /// The checkpoint set of the configured network.
    pub fn active_set(&self) -> &CheckpointSet {
        &self.checkpoints
    }

    pub fn checkpoints_enabled(&self) -> bool {
        self.enabled
    }

    pub fn verification_factor(&self) -> f64 {
        self.verification_factor
    }

    /// Whether a block with `hash` is acceptable at `height`.
    ///
    /// Heights without a checkpoint always pass. A `false` result means the block,
    /// and any chain containing it, is invalid.
    pub fn check_block(&self, height: CoreBlockHeight, hash: &BlockHash) -> bool {
        self.enforced_checkpoint(height)
            .is_none_or(|checkpoint| checkpoint.block_hash == *hash)
    }

    /// Like [`check_block`](Self::check_block), returning the expected hash on mismatch.
    pub fn verify_block(&self, height: CoreBlockHeight, hash: &BlockHash) -> CheckpointResult<()> {
        match self.enforced_checkpoint(height) {
            Some(checkpoint) if checkpoint.block_hash != *hash => {
                tracing::warn!(
                    height,
                    expected = %checkpoint.block_hash,
                    actual = %hash,
                    "Block hash does not match checkpoint"
                );
                Err(CheckpointError::Mismatch {
                    height,
                    expected: checkpoint.block_hash,
                    actual: *hash,
                })
            }
            _ => Ok(()),
        }
    }

    /// Height of the highest checkpoint, or 0 when enforcement is disabled.
    pub fn highest_checkpoint_height(&self) -> CoreBlockHeight {
        if !self.enabled {
            return 0;
        }

        self.checkpoints.last_checkpoint().height
    }

    /// Whether `height` lies at or below the highest checkpoint, where callers may
    /// take trusted shortcuts such as skipping script checks.
    pub fn is_within_checkpoint_range(&self, height: CoreBlockHeight) -> bool {
        self.enabled
            && !self.checkpoints.is_placeholder_only()
            && height <= self.checkpoints.last_checkpoint().height
    }

    /// Find the highest checkpoint whose block is present in `index`.
    ///
    /// Chain storage may not have reached the newest checkpoint yet; the returned
    /// entry is the deepest point the local chain is anchored to.
    pub fn resolve_last_checkpoint<'a, I: BlockIndex>(
        &self,
        index: &'a I,
    ) -> Option<&'a I::Entry> {
        if !self.enabled {
            return None;
        }

        let resolved = self
            .checkpoints
            .iter()
            .rev()
            .filter(|checkpoint| !checkpoint.is_placeholder())
            .find_map(|checkpoint| {
                index.lookup(&checkpoint.block_hash).map(|entry| (checkpoint, entry))
            });

        match resolved {
            Some((checkpoint, entry)) => {
                tracing::debug!(
                    height = checkpoint.height,
                    hash = %checkpoint.block_hash,
                    "Resolved last checkpoint in block index"
                );
                Some(entry)
            }
            None => {
                tracing::debug!("No checkpoint block found in block index");
                None
            }
        }
    }

    /// Estimate verification progress at `block` against the current wall clock.
    pub fn estimate_progress<B: ChainBlock>(&self, block: Option<&B>) -> f64 {
        self.estimate_progress_at(block, chrono::Utc::now().timestamp())
    }

    /// Estimate verification progress at `block` as of `now` (seconds since the epoch).
    pub fn estimate_progress_at<B: ChainBlock>(&self, block: Option<&B>, now: i64) -> f64 {
        let Some(block) = block else {
            return 0.0;
        };

        let progress = guess_verification_progress(
            block,
            self.checkpoints.stats(),
            now,
            self.verification_factor,
        );
        tracing::trace!(chain_tx = block.chain_tx(), progress, "Estimated verification progress");
        progress
    }

    // The checkpoint enforced at `height`, if any
    fn enforced_checkpoint(&self, height: CoreBlockHeight) -> Option<&Checkpoint> {
        if !self.enabled {
            return None;
        }

        self.checkpoints.get_checkpoint(height).filter(|checkpoint| !checkpoint.is_placeholder())
    }
}
