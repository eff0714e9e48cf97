//! # Airdrop Telemetry
//!
//! Structured logging for the airdrop Merkle tools, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use airdrop_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config)?;
//!     // Logs are now emitted to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AIRDROP_LOG_LEVEL` | `RUST_LOG`, then `info` | Log level filter |
//! | `AIRDROP_JSON_LOGS` | `false` | One JSON object per event |
//! | `AIRDROP_CONSOLE_OUTPUT` | `true` | Emit events at all |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    /// The log level directive did not parse.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "airdrop-merkle");
    }

    #[test]
    fn test_error_display() {
        let err = TelemetryError::Config("bad directive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: bad directive");
    }
}
