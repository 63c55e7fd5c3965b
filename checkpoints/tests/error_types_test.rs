//! Unit tests for error types and formatting

use assert_matches::assert_matches;
use chain_checkpoints::{
    BlockHash, CheckpointConfig, CheckpointError, CheckpointService, CheckpointSet,
    CheckpointStats, Hash, Network, ParseError,
};

#[test]
fn test_empty_table_message() {
    let stats = CheckpointStats {
        last_checkpoint_time: 0,
        last_checkpoint_tx_count: 0,
        tx_per_day: 0.0,
    };
    let err = CheckpointSet::new(Network::Mainnet, vec![], stats).unwrap_err();

    assert_eq!(err, CheckpointError::EmptyTable(Network::Mainnet));
    assert_eq!(err.to_string(), "No checkpoints configured for network mainnet");
}

#[test]
fn test_mismatch_message_shows_display_order_hashes() {
    let service = CheckpointService::new(&CheckpointConfig::mainnet()).unwrap();
    let actual = BlockHash::all_zeros();

    let err = service.verify_block(0, &actual).unwrap_err();
    assert_matches!(err, CheckpointError::Mismatch { height: 0, .. });

    let message = err.to_string();
    assert!(message.contains("at height 0"));
    assert!(message.contains("59ffe119282b34f0670d421b82b60ec74b2c383444e1b8b0b12ab037934c1cdf"));
}

#[test]
fn test_config_error_is_propagated() {
    let config = CheckpointConfig::mainnet().with_tx_per_day(f64::NAN);

    match CheckpointService::new(&config) {
        Err(CheckpointError::Config(msg)) => {
            assert!(msg.contains("tx_per_day_override"));
        }
        other => panic!("Expected CheckpointError::Config, got {other:?}"),
    }
}

#[test]
fn test_parse_error_message() {
    let err = "signet".parse::<Network>().unwrap_err();

    assert_eq!(err, ParseError::InvalidNetwork("signet".to_string()));
    assert_eq!(err.to_string(), "Invalid network name: signet");
}
