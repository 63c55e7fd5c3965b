//! Checkpoints are hardcoded blocks at specific heights that anchor the chain below them

use hex_lit::hex;

use crate::error::{CheckpointError, CheckpointResult};
use crate::network::Network;
use crate::types::{BlockHash, CoreBlockHeight};

// Hashes are written in display order, the way block explorers and RPC print them.
// A good checkpoint block is surrounded by blocks with reasonable timestamps and
// contains no strange transactions.
const MAINNET_CHECKPOINTS: [(CoreBlockHeight, [u8; 32]); 16] = [
    (0, hex!("59ffe119282b34f0670d421b82b60ec74b2c383444e1b8b0b12ab037934c1cdf")),
    (1, hex!("8a0254f5f72126c074380c592adc6636fc02dbb038b5ad1265a92226078a9d09")),
    (2, hex!("e4755f75dd2ce5cc7972c2c84a979dd1898788dbc10943149772bdc8c3e5bea8")),
    (3, hex!("bb8b9d95814ded1b7513fd802c3f90efc22ba31d35fbb7f923f643cc92b029af")),
    (4, hex!("b84ded6303dc510ac2d75c221a12c75a4059ad6c79faf0409497dd29a462606d")),
    (5, hex!("6e7d2ba749e87926121241e25026a4cb4dd737736e9a66d40bd3698fba503a17")),
    (6, hex!("c1e17019c51d59602d67ececd9f01f0d0b6292d162c1ea9705b70f70a45ff2bc")),
    (7, hex!("9269230a3c4b1d8dfdbf10cdc69267ac299813f44cdb43ece8437c35f33e8e3a")),
    (8, hex!("c71ff7b44a77ac275fb51b46f79a8dd2f9f37401734f47105e39fedfb033ab14")),
    (9, hex!("96a2fb229a458a51a06d7014c3fd0bc6c39b79f42581ee0141d766617a41b2a6")),
    (10, hex!("dddff615c6716c9a42f23673d1a1f6e4986861e5f3a03d3d05506153d7a90069")),
    (11, hex!("2431c4509fff4673b6db3d1ceeeeeb99733d7dca24b0657c6b10b52c243b5224")),
    (12, hex!("9321d115318f5c943446b3159338c36b644c5628715aefabaf697bafdffd5167")),
    (13, hex!("a8d1cbe2c33be8eb590cc84d148cfdf4aed02321d6244f773b0d190f49204ae8")),
    (14, hex!("6ed91b697eaeeb9b6893776e5cc400dff34de5c9ac5c2ecb7ced1035492d49d4")),
    (15, hex!("dc81a2b3508e218be1c3684a8083cca462a868ae6139cb0bede68ca21ffa5a4b")),
];

const MAINNET_STATS: CheckpointStats = CheckpointStats {
    // UNIX timestamp of the last checkpoint block
    last_checkpoint_time: 1523971019,
    // total number of transactions between genesis and the last checkpoint
    last_checkpoint_tx_count: 15,
    // estimated number of transactions per day after the last checkpoint
    tx_per_day: 10_000_000.0,
};

// Testnet has no vetted checkpoints yet. The single all-zero entry keeps the
// table non-empty without asserting anything about testnet blocks.
const TESTNET_CHECKPOINTS: [(CoreBlockHeight, [u8; 32]); 1] = [(0, [0; 32])];

const TESTNET_STATS: CheckpointStats = CheckpointStats {
    last_checkpoint_time: 0,
    last_checkpoint_tx_count: 0,
    tx_per_day: 0.0,
};

/// A block the chain must contain at the given height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: CoreBlockHeight,
    pub block_hash: BlockHash,
}

impl Checkpoint {
    pub fn new(height: CoreBlockHeight, block_hash: BlockHash) -> Self {
        Self {
            height,
            block_hash,
        }
    }

    /// Placeholder entries carry an all-zero hash and are never enforced.
    pub fn is_placeholder(&self) -> bool {
        self.block_hash.is_all_zeros()
    }
}

/// Summary of the chain at the last checkpoint, used to estimate sync progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointStats {
    pub last_checkpoint_time: i64,
    pub last_checkpoint_tx_count: u64,
    pub tx_per_day: f64,
}

/// The checkpoints of one network together with their summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointSet {
    network: Network,
    // sorted by height, lowest first
    checkpoints: Vec<Checkpoint>,
    stats: CheckpointStats,
}

impl CheckpointSet {
    /// Builds a set from checkpoints sorted by strictly ascending height.
    ///
    /// Fails with [`CheckpointError::EmptyTable`] when `checkpoints` is empty.
    pub fn new(
        network: Network,
        checkpoints: Vec<Checkpoint>,
        stats: CheckpointStats,
    ) -> CheckpointResult<Self> {
        if checkpoints.is_empty() {
            return Err(CheckpointError::EmptyTable(network));
        }

        if let Some(pair) = checkpoints.windows(2).find(|pair| pair[0].height >= pair[1].height) {
            return Err(CheckpointError::UnsortedHeights {
                previous: pair[0].height,
                height: pair[1].height,
            });
        }

        Ok(Self {
            network,
            checkpoints,
            stats,
        })
    }

    /// The compiled-in set for `network`.
    pub fn for_network(network: Network) -> CheckpointResult<Self> {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
        }
    }

    pub fn mainnet() -> CheckpointResult<Self> {
        Self::new(Network::Mainnet, from_literals(&MAINNET_CHECKPOINTS), MAINNET_STATS)
    }

    pub fn testnet() -> CheckpointResult<Self> {
        Self::new(Network::Testnet, from_literals(&TESTNET_CHECKPOINTS), TESTNET_STATS)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn stats(&self) -> &CheckpointStats {
        &self.stats
    }

    // Callers validate the rate through `CheckpointConfig::validate` first
    pub(crate) fn with_tx_per_day(mut self, tx_per_day: f64) -> Self {
        self.stats.tx_per_day = tx_per_day;
        self
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Always false for a constructed set; paired with `len` for `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// True when no entry asserts a real block hash.
    pub fn is_placeholder_only(&self) -> bool {
        self.checkpoints.iter().all(Checkpoint::is_placeholder)
    }

    /// Checkpoints in ascending height order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Checkpoint> {
        self.checkpoints.iter()
    }

    pub fn heights(&self) -> impl Iterator<Item = CoreBlockHeight> + '_ {
        self.checkpoints.iter().map(|checkpoint| checkpoint.height)
    }

    /// The checkpoint with the highest height.
    pub fn last_checkpoint(&self) -> &Checkpoint {
        // Construction guarantees at least one entry
        &self.checkpoints[self.checkpoints.len() - 1]
    }

    /// Get the checkpoint at exactly `height`, if there is one
    pub fn get_checkpoint(&self, height: CoreBlockHeight) -> Option<&Checkpoint> {
        self.checkpoints
            .binary_search_by_key(&height, |checkpoint| checkpoint.height)
            .ok()
            .map(|index| &self.checkpoints[index])
    }

    /// Get the last checkpoint at or before the given height
    pub fn last_checkpoint_before_height(&self, height: CoreBlockHeight) -> Option<&Checkpoint> {
        match self.checkpoints.binary_search_by_key(&height, |checkpoint| checkpoint.height) {
            Ok(index) => Some(&self.checkpoints[index]),
            Err(0) => None,
            Err(index) => Some(&self.checkpoints[index - 1]),
        }
    }
}

fn from_literals(literals: &[(CoreBlockHeight, [u8; 32])]) -> Vec<Checkpoint> {
    literals
        .iter()
        .map(|(height, bytes)| Checkpoint::new(*height, BlockHash::from_display_bytes(*bytes)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use bitcoin_hashes::Hash;

    use super::*;

    #[test]
    fn test_mainnet_set_loads_all_literals() {
        let set = CheckpointSet::mainnet().unwrap();

        assert_eq!(set.network(), Network::Mainnet);
        assert_eq!(set.len(), MAINNET_CHECKPOINTS.len());
        assert!(set.heights().eq(0..=15));
        assert!(!set.is_placeholder_only());
        assert!(!set.is_empty());
        assert_eq!(set.stats(), &MAINNET_STATS);
    }

    #[test]
    fn test_mainnet_hashes_keep_display_order() {
        let set = CheckpointSet::mainnet().unwrap();

        let genesis = set.get_checkpoint(0).unwrap();
        assert_eq!(
            genesis.block_hash,
            BlockHash::from_str("59ffe119282b34f0670d421b82b60ec74b2c383444e1b8b0b12ab037934c1cdf")
                .unwrap()
        );
        assert_eq!(
            set.last_checkpoint().block_hash.to_string(),
            "dc81a2b3508e218be1c3684a8083cca462a868ae6139cb0bede68ca21ffa5a4b"
        );
    }

    #[test]
    fn test_testnet_set_is_placeholder() {
        let set = CheckpointSet::testnet().unwrap();

        assert_eq!(set.network(), Network::Testnet);
        assert_eq!(set.len(), 1);
        assert!(set.is_placeholder_only());
        assert_eq!(set.last_checkpoint().height, 0);
        assert_eq!(set.stats().last_checkpoint_tx_count, 0);
    }

    #[test]
    fn test_for_network() {
        assert_eq!(CheckpointSet::for_network(Network::Mainnet), CheckpointSet::mainnet());
        assert_eq!(CheckpointSet::for_network(Network::Testnet), CheckpointSet::testnet());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = CheckpointSet::new(Network::Mainnet, vec![], MAINNET_STATS);
        assert_matches!(result, Err(CheckpointError::EmptyTable(Network::Mainnet)));
    }

    #[test]
    fn test_unsorted_and_duplicate_heights_are_rejected() {
        let hash = BlockHash::hash(b"checkpoint");

        let unsorted =
            vec![Checkpoint::new(0, hash), Checkpoint::new(5, hash), Checkpoint::new(3, hash)];
        assert_matches!(
            CheckpointSet::new(Network::Mainnet, unsorted, MAINNET_STATS),
            Err(CheckpointError::UnsortedHeights {
                previous: 5,
                height: 3
            })
        );

        let duplicate = vec![Checkpoint::new(0, hash), Checkpoint::new(0, hash)];
        assert_matches!(
            CheckpointSet::new(Network::Mainnet, duplicate, MAINNET_STATS),
            Err(CheckpointError::UnsortedHeights {
                previous: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_tx_per_day_override() {
        let set = CheckpointSet::mainnet().unwrap().with_tx_per_day(42.0);
        assert_eq!(set.stats().tx_per_day, 42.0);
        assert_eq!(set.stats().last_checkpoint_tx_count, 15);
    }
}
