//! Web front end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::instrument;

/// Configuration compiled into the bundle from `rewind.toml`.
const EMBEDDED: &str = include_str!("../rewind.toml");

/// Configuration for the browser front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct WebConfig {
    /// Id of the element the game is mounted into.
    #[serde(default = "default_mount_id")]
    mount_id: String,

    /// Filter directive for console logging (e.g. "info", "rewind_tictactoe=debug").
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_mount_id() -> String {
    "root".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            mount_id: default_mount_id(),
            log_level: default_log_level(),
        }
    }
}

impl WebConfig {
    /// Loads the configuration embedded at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = WebConfig::load().expect("embedded config is valid");
        assert_eq!(config.mount_id(), "root");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = WebConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, WebConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = WebConfig::from_toml_str(
            "mount_id = \"app\"\nlog_level = \"rewind_tictactoe=debug\"",
        )
        .expect("valid config");
        assert_eq!(config.mount_id(), "app");
        assert_eq!(config.log_level(), "rewind_tictactoe=debug");
    }

    #[test]
    fn test_bad_type_is_error() {
        let err = WebConfig::from_toml_str("mount_id = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
