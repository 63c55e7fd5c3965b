//! Heuristic estimate of how far initial block verification has progressed.
//!
//! Work is counted as 1.0 per transaction up to the last checkpoint and as the
//! verification factor per transaction after it, where every signature is checked.
//! The result is advisory and must never feed consensus decisions.

use crate::chain::CheckpointStats;
use crate::types::ChainBlock;

/// How many times slower transactions after the last checkpoint are expected to
/// verify. Reindexing from a fast disk with a slow CPU can push this up to 20,
/// downloading over a slow network with a fast multicore CPU keeps it close to 1.
pub const DEFAULT_SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Guess the fraction of verification work done once `block` is connected.
///
/// Returns a value in `[0.0, 1.0]`. When there is no work at all on either side
/// (an empty chain with nothing expected after it) the result is `0.0`.
pub fn guess_verification_progress<B: ChainBlock>(
    block: &B,
    stats: &CheckpointStats,
    now: i64,
    verification_factor: f64,
) -> f64 {
    let chain_tx = block.chain_tx();

    let (work_before, work_after) = if chain_tx <= stats.last_checkpoint_tx_count {
        let cheap_before = chain_tx as f64;
        let cheap_after = (stats.last_checkpoint_tx_count - chain_tx) as f64;
        let expensive_after = days_between(stats.last_checkpoint_time, now) * stats.tx_per_day;
        (cheap_before, cheap_after + expensive_after * verification_factor)
    } else {
        let cheap_before = stats.last_checkpoint_tx_count as f64;
        let expensive_before = (chain_tx - stats.last_checkpoint_tx_count) as f64;
        let expensive_after = days_between(block.time(), now) * stats.tx_per_day;
        let work_before = cheap_before + expensive_before * verification_factor;
        (work_before, expensive_after * verification_factor)
    };

    let total_work = work_before + work_after;
    if total_work.is_nan() || total_work <= 0.0 {
        return 0.0;
    }

    (work_before / total_work).clamp(0.0, 1.0)
}

// Clock skew can put `from` after `to`; that never counts as negative work
fn days_between(from: i64, to: i64) -> f64 {
    to.saturating_sub(from).max(0) as f64 / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestBlock;

    const STATS: CheckpointStats = CheckpointStats {
        last_checkpoint_time: 1_000_000,
        last_checkpoint_tx_count: 1_000,
        tx_per_day: 100.0,
    };

    fn progress(chain_tx: u64, time: i64, now: i64) -> f64 {
        guess_verification_progress(
            &TestBlock::with_progress(chain_tx, time),
            &STATS,
            now,
            DEFAULT_SIGCHECK_VERIFICATION_FACTOR,
        )
    }

    #[test]
    fn test_below_checkpoint() {
        // One day after the checkpoint: 100 expensive transactions remain at factor 5
        let now = STATS.last_checkpoint_time + 86_400;
        let expected = 400.0 / (400.0 + 600.0 + 500.0);

        assert!((progress(400, 0, now) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_past_checkpoint() {
        let block_time = STATS.last_checkpoint_time + 86_400;
        let now = block_time + 2 * 86_400;
        // 1000 cheap + 10 expensive before, 200 expensive after
        let expected = (1_000.0 + 50.0) / (1_000.0 + 50.0 + 1_000.0);

        assert!((progress(1_010, block_time, now) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_caught_up_at_tip() {
        let now = STATS.last_checkpoint_time + 86_400;
        assert_eq!(progress(2_000, now, now), 1.0);
    }

    #[test]
    fn test_monotonic_in_chain_tx() {
        let now = STATS.last_checkpoint_time + 10 * 86_400;

        let mut previous = 0.0;
        for chain_tx in (0..=2_000).step_by(25) {
            // Blocks past the checkpoint share the checkpoint timestamp so only the
            // transaction count moves
            let value = progress(chain_tx, STATS.last_checkpoint_time, now);
            assert!(value >= previous, "progress decreased at chain_tx {chain_tx}");
            assert!((0.0..=1.0).contains(&value));
            previous = value;
        }
    }

    #[test]
    fn test_zero_work_is_zero_not_nan() {
        let stats = CheckpointStats {
            last_checkpoint_time: 1_000_000,
            last_checkpoint_tx_count: 0,
            tx_per_day: 100.0,
        };
        let block = TestBlock::with_progress(0, stats.last_checkpoint_time);

        let value = guess_verification_progress(
            &block,
            &stats,
            stats.last_checkpoint_time,
            DEFAULT_SIGCHECK_VERIFICATION_FACTOR,
        );
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_clock_skew_is_clamped() {
        // `now` before the checkpoint time contributes no remaining work
        let value = progress(500, 0, STATS.last_checkpoint_time - 86_400);
        assert!((value - 0.5).abs() < 1e-12);

        // A block timestamp in the future is treated as the tip
        let block_time = STATS.last_checkpoint_time + 86_400;
        let value = progress(1_500, block_time, STATS.last_checkpoint_time);
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_factor_changes_weight_after_checkpoint() {
        let now = STATS.last_checkpoint_time + 86_400;
        let block = TestBlock::with_progress(500, 0);

        let cheap = guess_verification_progress(&block, &STATS, now, 1.0);
        let expensive = guess_verification_progress(&block, &STATS, now, 20.0);
        assert!(cheap > expensive);
    }
}
