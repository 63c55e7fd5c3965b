//! Hardcoded block checkpoints for a full node.
//!
//! The crate embeds a small table of (height, block hash) pairs per network that
//! operators verified as part of the canonical chain, and uses it to:
//!
//! - Reject blocks at a checkpointed height whose hash differs from the table
//! - Report the highest checkpoint height, bounding trusted sync shortcuts
//! - Find the deepest checkpoint already present in the node's block index,
//!   which limits how far a reorganization may rewrite history
//! - Estimate initial sync progress for display purposes
//!
//! # Quick Start
//!
//! ```
//! use chain_checkpoints::{BlockHash, CheckpointConfig, CheckpointService, Network};
//! use std::str::FromStr;
//!
//! let service = CheckpointService::new(&CheckpointConfig::new(Network::Mainnet))?;
//!
//! let genesis =
//!     BlockHash::from_str("59ffe119282b34f0670d421b82b60ec74b2c383444e1b8b0b12ab037934c1cdf")
//!         .unwrap();
//! assert!(service.check_block(0, &genesis));
//! assert!(!service.check_block(1, &genesis));
//! assert_eq!(service.highest_checkpoint_height(), 15);
//! # Ok::<(), chain_checkpoints::CheckpointError>(())
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod types;

pub use chain::{
    Checkpoint, CheckpointService, CheckpointSet, CheckpointStats,
    DEFAULT_SIGCHECK_VERIFICATION_FACTOR,
};
pub use config::CheckpointConfig;
pub use error::{CheckpointError, CheckpointResult, LoggingError, LoggingResult, ParseError};
pub use logging::{LoggingConfig, init_console_logging, init_logging};
pub use network::Network;
pub use tracing::level_filters::LevelFilter;
pub use types::{BlockHash, BlockIndex, ChainBlock, CoreBlockHeight};

// Re-export hash trait
pub use bitcoin_hashes::Hash;

/// Current version of the chain-checkpoints library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
