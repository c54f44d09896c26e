//! `OAUTH_PROXY_*` environment variable overlay.
//!
//! Reads the same variables the proxy server reads, so an exported block
//! produced by the compiler can be fed back in. Empty variables count as
//! unset.

use super::defaults::ENV_PREFIX;
use super::{ConfigError, Environment, LogLevel};

/// Variable name suffixes, appended to [`ENV_PREFIX`].
pub mod var {
    /// API key variable suffix.
    pub const API_KEY: &str = "API_KEY";
    /// IP whitelist variable suffix (comma-separated entries).
    pub const IP_WHITELIST: &str = "IP_WHITELIST";
    /// Port variable suffix.
    pub const PORT: &str = "PORT";
    /// Environment variable suffix.
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level variable suffix.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Timeout variable suffix.
    pub const TIMEOUT: &str = "TIMEOUT";

    /// Every suffix the server reads, in the order `show` lists them.
    pub const ALL: [&str; 6] = [API_KEY, PORT, ENVIRONMENT, LOG_LEVEL, TIMEOUT, IP_WHITELIST];
}

/// Values found in `OAUTH_PROXY_*` environment variables.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvOverlay {
    /// `OAUTH_PROXY_API_KEY`
    pub api_key: Option<String>,
    /// `OAUTH_PROXY_IP_WHITELIST`, split on commas
    pub ip_whitelist: Option<Vec<String>>,
    /// `OAUTH_PROXY_PORT`
    pub port: Option<i64>,
    /// `OAUTH_PROXY_ENVIRONMENT`
    pub environment: Option<Environment>,
    /// `OAUTH_PROXY_LOG_LEVEL`
    pub log_level: Option<LogLevel>,
    /// `OAUTH_PROXY_TIMEOUT`
    pub timeout: Option<i64>,
}

impl EnvOverlay {
    /// Reads the overlay from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a recognized variable holds an unparsable value.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the overlay from `(name, value)` pairs.
    ///
    /// Variables without the `OAUTH_PROXY_` prefix and unknown suffixes are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a recognized variable holds an unparsable value.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut overlay = Self::default();

        for (name, value) in vars {
            let (name, value) = (name.as_ref(), value.as_ref());
            let Some(suffix) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            overlay.apply(name, suffix, value)?;
        }

        Ok(overlay)
    }

    fn apply(&mut self, name: &str, suffix: &str, value: &str) -> Result<(), ConfigError> {
        match suffix {
            var::API_KEY => self.api_key = Some(value.to_string()),
            var::IP_WHITELIST => self.ip_whitelist = Some(split_list(value)),
            var::PORT => self.port = Some(parse_int(name, value)?),
            var::ENVIRONMENT => {
                self.environment = Some(
                    value
                        .parse::<Environment>()
                        .map_err(|e| ConfigError::invalid_env(name, value, e.to_string()))?,
                );
            }
            var::LOG_LEVEL => {
                self.log_level = Some(
                    value
                        .parse::<LogLevel>()
                        .map_err(|e| ConfigError::invalid_env(name, value, e.to_string()))?,
                );
            }
            var::TIMEOUT => self.timeout = Some(parse_int(name, value)?),
            _ => {
                tracing::debug!("Ignoring unrecognized variable {name}");
                return Ok(());
            }
        }

        tracing::debug!("Read {name} from environment");
        Ok(())
    }
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_int(name: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_env(name, value, "expected an integer"))
}
