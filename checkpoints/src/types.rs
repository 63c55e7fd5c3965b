//! Common types shared with the node's chain storage.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use bitcoin_hashes::{Hash, hash_newtype, sha256d};

/// Height of a block in the chain, genesis being 0.
pub type CoreBlockHeight = u32;

hash_newtype! {
    /// A block hash, double SHA-256 of the block header. Displayed byte-reversed.
    pub struct BlockHash(sha256d::Hash);
}

impl BlockHash {
    /// Builds a hash from the 32 bytes in the order they are displayed (hex strings,
    /// explorers, RPC), which is the reverse of the internal order.
    pub fn from_display_bytes(mut bytes: [u8; 32]) -> Self {
        bytes.reverse();
        BlockHash::from_byte_array(bytes)
    }

    /// An all-zero hash marks a placeholder entry that asserts nothing.
    pub fn is_all_zeros(&self) -> bool {
        self.as_byte_array().iter().all(|b| *b == 0)
    }
}

/// The subset of a block index entry the progress heuristic reads.
pub trait ChainBlock {
    /// Cumulative number of transactions from genesis up to and including this block.
    fn chain_tx(&self) -> u64;

    /// Block timestamp, seconds since the Unix epoch.
    fn time(&self) -> i64;
}

impl<T: ChainBlock + ?Sized> ChainBlock for &T {
    fn chain_tx(&self) -> u64 {
        (**self).chain_tx()
    }

    fn time(&self) -> i64 {
        (**self).time()
    }
}

impl<T: ChainBlock + ?Sized> ChainBlock for Arc<T> {
    fn chain_tx(&self) -> u64 {
        (**self).chain_tx()
    }

    fn time(&self) -> i64 {
        (**self).time()
    }
}

/// Read-only lookup of block handles by hash.
///
/// The index is owned by chain storage; lookups borrow it for the duration of a call.
pub trait BlockIndex {
    type Entry;

    fn lookup(&self, hash: &BlockHash) -> Option<&Self::Entry>;
}

impl<E, S: BuildHasher> BlockIndex for HashMap<BlockHash, E, S> {
    type Entry = E;

    fn lookup(&self, hash: &BlockHash) -> Option<&E> {
        self.get(hash)
    }
}

impl<E> BlockIndex for BTreeMap<BlockHash, E> {
    type Entry = E;

    fn lookup(&self, hash: &BlockHash) -> Option<&E> {
        self.get(hash)
    }
}
