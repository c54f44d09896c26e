//! Domain validation of a [`ServerConfig`].
//!
//! Validation is advisory: it reports problems but never blocks rendering.
//! An empty result is the only success signal.

use serde::Serialize;
use thiserror::Error;

use crate::address::is_valid_address_or_network;
use crate::config::ServerConfig;
use crate::config::defaults::{PORT_MAX, PORT_MIN, TIMEOUT_MAX_SECS, TIMEOUT_MIN_SECS};

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;

/// Field names used to scope [`ValidationError`]s.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The port field.
    pub const PORT: &str = "port";
    /// The timeout field.
    pub const TIMEOUT: &str = "timeout";
    /// The IP whitelist field.
    pub const IP_WHITELIST: &str = "ipWhitelist";
}

/// A single violated rule, scoped to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field the error belongs to (see [`field`])
    pub field: &'static str,
    /// Human-readable description, suitable for display next to the field
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Checks `config` against the domain rules.
///
/// Errors are reported in a fixed order: port, timeout, then one error per
/// malformed whitelist entry in input order. Whitelist entries are trimmed
/// before checking and blank entries are skipped; positions in messages are
/// 1-based and count blank entries too.
///
/// # Examples
///
/// ```
/// use oauth_proxy_config::config::ServerConfig;
/// use oauth_proxy_config::validate::{field, validate};
///
/// let config = ServerConfig {
///     port: 70000,
///     ip_whitelist: vec!["not-an-ip".to_string()],
///     ..ServerConfig::default()
/// };
///
/// let errors = validate(&config);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].field, field::PORT);
/// assert_eq!(errors[1].field, field::IP_WHITELIST);
/// ```
#[must_use]
pub fn validate(config: &ServerConfig) -> Vec<ValidationError> {
    let port = (!(PORT_MIN..=PORT_MAX).contains(&config.port)).then(|| {
        ValidationError::new(
            field::PORT,
            format!("Port must be between {PORT_MIN} and {PORT_MAX}"),
        )
    });

    let timeout = (!(TIMEOUT_MIN_SECS..=TIMEOUT_MAX_SECS).contains(&config.timeout)).then(|| {
        ValidationError::new(
            field::TIMEOUT,
            format!("Timeout must be between {TIMEOUT_MIN_SECS} and {TIMEOUT_MAX_SECS} seconds"),
        )
    });

    let whitelist = config
        .ip_whitelist
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| whitelist_entry_error(index, entry));

    port.into_iter().chain(timeout).chain(whitelist).collect()
}

fn whitelist_entry_error(index: usize, entry: &str) -> Option<ValidationError> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || is_valid_address_or_network(trimmed) {
        return None;
    }

    Some(ValidationError::new(
        field::IP_WHITELIST,
        format!(
            "Invalid IP address or CIDR range at line {}: {entry}",
            index + 1
        ),
    ))
}
