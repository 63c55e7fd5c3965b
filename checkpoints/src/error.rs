//! Error types for the checkpoint subsystem.

use thiserror::Error;

use crate::network::Network;
use crate::types::{BlockHash, CoreBlockHeight};

/// Errors raised while building or enforcing a checkpoint set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckpointError {
    /// A checkpoint set without entries would silently disable the check.
    #[error("No checkpoints configured for network {0}")]
    EmptyTable(Network),

    #[error("Checkpoints must be sorted by strictly ascending height: {height} follows {previous}")]
    UnsortedHeights {
        previous: CoreBlockHeight,
        height: CoreBlockHeight,
    },

    #[error("Block {actual} at height {height} does not match checkpoint {expected}")]
    Mismatch {
        height: CoreBlockHeight,
        expected: BlockHash,
        actual: BlockHash,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Parse-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid network name: {0}")]
    InvalidNetwork(String),
}

/// Logging-related errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Subscriber initialization failed: {0}")]
    SubscriberInit(String),
}

/// Type alias for checkpoint operation results.
pub type CheckpointResult<T> = std::result::Result<T, CheckpointError>;

/// Type alias for logging operation results.
pub type LoggingResult<T> = std::result::Result<T, LoggingError>;
