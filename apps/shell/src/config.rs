//! Shell configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the demo can be steered without rebuilding:
//!
//! - `SHOPFRONT_FETCH_DELAY_MS` - simulated network delay for the demo
//!   catalog source (default: 1000)
//! - `SHOPFRONT_SIMULATE_FAILURE` - make the catalog fetch fail, to walk
//!   the error/retry path (default: false)

use std::env;
use std::time::Duration;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Simulated network delay for the demo catalog source.
    pub fetch_delay: Duration,

    /// Whether the demo catalog source should fail its first fetch.
    pub simulate_failure: bool,
}

impl ShellConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let fetch_delay_ms: u64 = env::var("SHOPFRONT_FETCH_DELAY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_FETCH_DELAY_MS".to_string()))?;

        let simulate_failure = env::var("SHOPFRONT_SIMULATE_FAILURE")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_SIMULATE_FAILURE".to_string()))?;

        Ok(ShellConfig {
            fetch_delay: Duration::from_millis(fetch_delay_ms),
            simulate_failure,
        })
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            fetch_delay: Duration::from_millis(1000),
            simulate_failure: false,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
