//! The server configuration value shared by the validator and the compiler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings of a Gmail OAuth proxy server deployment.
///
/// `port` and `timeout` are wide signed integers so that out-of-range input
/// stays representable; range checks are the job of
/// [`validate`](crate::validate::validate), and the compiler renders
/// whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// API key clients must present. `None` and `Some("")` are equivalent.
    pub api_key: Option<String>,

    /// Addresses or CIDR networks allowed to reach the server, in input order
    pub ip_whitelist: Vec<String>,

    /// Listening port
    pub port: i64,

    /// Runtime environment
    pub environment: Environment,

    /// Log level
    pub log_level: LogLevel,

    /// Request timeout in seconds
    pub timeout: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            ip_whitelist: Vec::new(),
            port: defaults::PORT,
            environment: defaults::ENVIRONMENT,
            log_level: defaults::LOG_LEVEL,
            timeout: defaults::TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Returns the API key if one is set and non-empty.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Returns the API key in a form safe for display and logs.
    ///
    /// Keys longer than 8 characters keep their first and last 4 characters,
    /// shorter keys are fully masked. Returns `None` when no key is set.
    #[must_use]
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key().map(mask_secret)
    }

    /// Returns `true` if clients must present an API key or connect from a
    /// whitelisted address.
    ///
    /// The proxy server refuses to start without at least one of the two.
    #[must_use]
    pub fn has_auth_method(&self) -> bool {
        self.api_key().is_some() || !self.ip_whitelist.is_empty()
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = self
            .masked_api_key()
            .unwrap_or_else(|| "none".to_string());

        write!(
            f,
            "Config {{ api_key: {}, ip_whitelist: {} rule(s), port: {}, environment: {}, \
             log_level: {}, timeout: {}s }}",
            api_key,
            self.ip_whitelist.len(),
            self.port,
            self.environment,
            self.log_level,
            self.timeout,
        )
    }
}

/// Masks a secret for display, keeping the first and last 4 characters of
/// values longer than 8 characters.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}

/// Error returned when a string names no known [`Environment`] or [`LogLevel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not one of: {expected}")]
pub struct UnknownVariant {
    /// The rejected input
    pub value: String,
    /// Comma-separated list of accepted values
    pub expected: &'static str,
}

/// Runtime environment of the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development mode
    #[default]
    Development,
    /// Production mode (HTTPS enforced, release logging)
    Production,
}

impl Environment {
    /// Returns the name used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(UnknownVariant {
                value: s.to_string(),
                expected: "development, production",
            }),
        }
    }
}

/// Log level of the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug output
    Debug,
    /// Informational output
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl LogLevel {
    /// Returns the name used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(UnknownVariant {
                value: s.to_string(),
                expected: "debug, info, warn, error",
            }),
        }
    }
}
