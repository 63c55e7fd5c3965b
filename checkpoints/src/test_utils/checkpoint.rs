use std::collections::HashMap;

use bitcoin_hashes::Hash;

use crate::chain::{Checkpoint, CheckpointSet, CheckpointStats};
use crate::network::Network;
use crate::types::{BlockHash, ChainBlock, CoreBlockHeight};

/// A minimal block index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestBlock {
    pub hash: BlockHash,
    pub height: CoreBlockHeight,
    pub chain_tx: u64,
    pub time: i64,
}

impl TestBlock {
    pub fn new(hash: BlockHash, height: CoreBlockHeight, chain_tx: u64, time: i64) -> Self {
        Self {
            hash,
            height,
            chain_tx,
            time,
        }
    }

    /// A block whose hash is derived from its height.
    pub fn dummy(height: CoreBlockHeight) -> Self {
        Self::new(dummy_hash(height), height, height as u64 + 1, 1_500_000_000 + height as i64)
    }

    /// A block carrying the hash of `checkpoint`.
    pub fn at_checkpoint(checkpoint: &Checkpoint) -> Self {
        Self::new(
            checkpoint.block_hash,
            checkpoint.height,
            checkpoint.height as u64 + 1,
            1_500_000_000 + checkpoint.height as i64,
        )
    }

    /// A block used only for progress estimation.
    pub fn with_progress(chain_tx: u64, time: i64) -> Self {
        Self::new(BlockHash::all_zeros(), 0, chain_tx, time)
    }
}

impl ChainBlock for TestBlock {
    fn chain_tx(&self) -> u64 {
        self.chain_tx
    }

    fn time(&self) -> i64 {
        self.time
    }
}

/// Index the given blocks by hash.
pub fn block_index(blocks: impl IntoIterator<Item = TestBlock>) -> HashMap<BlockHash, TestBlock> {
    blocks.into_iter().map(|block| (block.hash, block)).collect()
}

fn dummy_hash(height: CoreBlockHeight) -> BlockHash {
    BlockHash::hash(&height.to_le_bytes())
}

impl Checkpoint {
    pub fn dummy(height: CoreBlockHeight) -> Checkpoint {
        Checkpoint::new(height, dummy_hash(height))
    }
}

impl CheckpointSet {
    /// A mainnet set with dummy hashes at `heights`, which must be ascending.
    pub fn dummy(heights: &[CoreBlockHeight]) -> CheckpointSet {
        let checkpoints = heights.iter().map(|height| Checkpoint::dummy(*height)).collect();
        let stats = CheckpointStats {
            last_checkpoint_time: 1_500_000_000,
            last_checkpoint_tx_count: 1_000,
            tx_per_day: 1_000.0,
        };

        CheckpointSet::new(Network::Mainnet, checkpoints, stats)
            .expect("dummy heights must be non-empty and ascending")
    }
}
