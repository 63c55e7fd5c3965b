//! Logging setup for binaries embedding the checkpoint service.
//!
//! Library code only emits `tracing` events; installing a subscriber is left to the
//! application, which can use these helpers or its own.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{LoggingError, LoggingResult};

/// Configuration for logging output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter. If None, falls back to `RUST_LOG`, then INFO.
    pub level: Option<LevelFilter>,
    /// Whether to output logs to console (stderr).
    pub console: bool,
    /// Whether to include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            console: true,
            with_target: true,
        }
    }
}

/// Initialize console-only logging with the given level.
pub fn init_console_logging(level: LevelFilter) -> LoggingResult<()> {
    init_logging(LoggingConfig {
        level: Some(level),
        ..LoggingConfig::default()
    })
}

/// Initialize logging with the given configuration.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// Note: If console output is disabled, logging is disabled
/// (tracing macros become no-ops) and Ok is returned.
pub fn init_logging(config: LoggingConfig) -> LoggingResult<()> {
    if !config.console {
        return Ok(());
    }

    let env_filter = build_env_filter(config.level);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(config.with_target))
        .try_init()
        .map_err(|e| LoggingError::SubscriberInit(e.to_string()))
}

// Build env filter from explicit level or RUST_LOG
fn build_env_filter(level: Option<LevelFilter>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LevelFilter::INFO.to_string())),
    }
}
