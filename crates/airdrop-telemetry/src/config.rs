//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or an `EnvFilter` directive)
    pub log_level: String,

    /// Whether to emit events to stderr
    pub console_output: bool,

    /// Whether to format events as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "airdrop-merkle".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AIRDROP_SERVICE_NAME`: Service name (default: airdrop-merkle)
    /// - `AIRDROP_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `AIRDROP_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `AIRDROP_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service_name: lookup("AIRDROP_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("AIRDROP_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("AIRDROP_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: lookup("AIRDROP_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Override the level, e.g. from a `--verbose` flag.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.console_output);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, TelemetryConfig::default());
    }

    #[test]
    fn test_log_level_precedence() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("AIRDROP_LOG_LEVEL", "debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.log_level, "debug");

        let config = TelemetryConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_boolean_flags() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("AIRDROP_JSON_LOGS", "TRUE"),
            ("AIRDROP_CONSOLE_OUTPUT", "0"),
        ]));
        assert!(config.json_logs);
        assert!(!config.console_output);

        let config = TelemetryConfig::from_lookup(lookup_from(&[("AIRDROP_JSON_LOGS", "yes")]));
        assert!(!config.json_logs);
    }

    #[test]
    fn test_with_log_level() {
        let config = TelemetryConfig::default().with_log_level("trace");
        assert_eq!(config.log_level, "trace");
    }
}
