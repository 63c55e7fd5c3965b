//! Helpers for building checkpoint sets and block indexes in tests.

mod checkpoint;

pub use checkpoint::{TestBlock, block_index};
