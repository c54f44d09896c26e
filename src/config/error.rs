//! Error types for loading configuration sources.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from reading, parsing and writing configuration sources.
/// Domain rule violations (port range, whitelist syntax) are not errors at
/// this layer; they are reported by [`validate`](crate::validate::validate).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML configuration document.
    #[error("Failed to parse YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Failed to parse a TOML configuration document.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An `OAUTH_PROXY_*` environment variable holds an unusable value.
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// The rejected value
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Creates an `InvalidEnvValue` error.
    #[must_use]
    pub fn invalid_env(var: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
