//! Selection and ordering of the fields that appear in rendered output.

use crate::config::defaults;
use crate::config::env::var;
use crate::config::{Environment, LogLevel, ServerConfig};

/// A configuration field whose value differs from its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludedField<'a> {
    /// Non-empty API key
    ApiKey(&'a str),
    /// Non-empty whitelist, in input order
    IpWhitelist(&'a [String]),
    /// Non-default port
    Port(i64),
    /// Non-default environment
    Environment(Environment),
    /// Non-default log level
    LogLevel(LogLevel),
    /// Non-default timeout
    Timeout(i64),
}

/// The value of an included field, by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A string value
    Text(&'a str),
    /// An integer value
    Number(i64),
    /// A list of strings
    List(&'a [String]),
}

impl<'a> IncludedField<'a> {
    /// Command-line flag name, without the leading `--`.
    #[must_use]
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api-key",
            Self::IpWhitelist(_) => "ip-whitelist",
            Self::Port(_) => "port",
            Self::Environment(_) => "env",
            Self::LogLevel(_) => "log-level",
            Self::Timeout(_) => "timeout",
        }
    }

    /// Environment variable name suffix, appended to `OAUTH_PROXY_`.
    #[must_use]
    pub const fn env_suffix(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => var::API_KEY,
            Self::IpWhitelist(_) => var::IP_WHITELIST,
            Self::Port(_) => var::PORT,
            Self::Environment(_) => var::ENVIRONMENT,
            Self::LogLevel(_) => var::LOG_LEVEL,
            Self::Timeout(_) => var::TIMEOUT,
        }
    }

    /// Config file key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api_key",
            Self::IpWhitelist(_) => "ip_whitelist",
            Self::Port(_) => "port",
            Self::Environment(_) => "environment",
            Self::LogLevel(_) => "log_level",
            Self::Timeout(_) => "timeout",
        }
    }

    /// The field's value.
    #[must_use]
    pub const fn value(&self) -> FieldValue<'a> {
        match *self {
            Self::ApiKey(key) => FieldValue::Text(key),
            Self::IpWhitelist(entries) => FieldValue::List(entries),
            Self::Port(n) | Self::Timeout(n) => FieldValue::Number(n),
            Self::Environment(env) => FieldValue::Text(env.as_str()),
            Self::LogLevel(level) => FieldValue::Text(level.as_str()),
        }
    }
}

/// Returns the fields of `config` that differ from their defaults, in
/// rendering order.
#[must_use]
pub fn included_fields(config: &ServerConfig) -> Vec<IncludedField<'_>> {
    let whitelist = !config.ip_whitelist.is_empty();
    let port = config.port != defaults::PORT;
    let environment = config.environment != defaults::ENVIRONMENT;
    let log_level = config.log_level != defaults::LOG_LEVEL;
    let timeout = config.timeout != defaults::TIMEOUT_SECS;

    [
        config.api_key().map(IncludedField::ApiKey),
        whitelist.then_some(IncludedField::IpWhitelist(&config.ip_whitelist)),
        port.then_some(IncludedField::Port(config.port)),
        environment.then_some(IncludedField::Environment(config.environment)),
        log_level.then_some(IncludedField::LogLevel(config.log_level)),
        timeout.then_some(IncludedField::Timeout(config.timeout)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
