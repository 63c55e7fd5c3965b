//! Checkpoint enforcement for the chain
//!
//! This module provides:
//! - The compiled-in checkpoint sets for each network
//! - Block hash verification at checkpointed heights
//! - Resolution of the deepest checkpoint present in the local block index
//! - A heuristic estimate of initial sync progress

pub mod checkpoints;
pub mod progress;
pub mod service;


pub use checkpoints::{Checkpoint, CheckpointSet, CheckpointStats};
pub use progress::{DEFAULT_SIGCHECK_VERIFICATION_FACTOR, guess_verification_progress};
pub use service::CheckpointService;
