//! Configuration for checkpoint enforcement.

use crate::chain::DEFAULT_SIGCHECK_VERIFICATION_FACTOR;
use crate::network::Network;

/// Configuration for the checkpoint service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckpointConfig {
    /// Network whose checkpoint set is enforced.
    pub network: Network,

    /// Whether checkpoints are enforced at all. Defaults to true.
    pub enable_checkpoints: bool,

    /// Relative cost of verifying a transaction after the last checkpoint.
    pub verification_factor: f64,

    /// Overrides the compiled-in transactions per day expected after the last checkpoint.
    pub tx_per_day_override: Option<f64>,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            enable_checkpoints: true,
            verification_factor: DEFAULT_SIGCHECK_VERIFICATION_FACTOR,
            tx_per_day_override: None,
        }
    }
}

impl CheckpointConfig {
    /// Create a new configuration for the given network.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Create a configuration for mainnet.
    pub fn mainnet() -> Self {
        Self::new(Network::Mainnet)
    }

    /// Create a configuration for testnet.
    pub fn testnet() -> Self {
        Self::new(Network::Testnet)
    }

    /// Disable checkpoint enforcement.
    pub fn without_checkpoints(mut self) -> Self {
        self.enable_checkpoints = false;
        self
    }

    /// Enable or disable checkpoint enforcement.
    pub fn with_checkpoints(mut self, enabled: bool) -> Self {
        self.enable_checkpoints = enabled;
        self
    }

    /// Set the verification cost multiplier for transactions after the last checkpoint.
    pub fn with_verification_factor(mut self, factor: f64) -> Self {
        self.verification_factor = factor;
        self
    }

    /// Override the estimated transactions per day after the last checkpoint.
    pub fn with_tx_per_day(mut self, tx_per_day: f64) -> Self {
        self.tx_per_day_override = Some(tx_per_day);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.verification_factor.is_finite() || self.verification_factor <= 0.0 {
            return Err(format!(
                "verification_factor must be a finite number > 0, got {}",
                self.verification_factor
            ));
        }

        if let Some(tx_per_day) = self.tx_per_day_override {
            if !tx_per_day.is_finite() || tx_per_day < 0.0 {
                return Err(format!(
                    "tx_per_day_override must be a finite number >= 0, got {tx_per_day}"
                ));
            }
        }

        Ok(())
    }
}
