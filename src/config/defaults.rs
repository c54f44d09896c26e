//! Default values for configuration options.
//!
//! These mirror the proxy server's built-in defaults. A field equal to its
//! default is left out of every rendered output.

use super::{Environment, LogLevel};

/// Default listening port.
pub const PORT: i64 = 8080;

/// Default runtime environment.
pub const ENVIRONMENT: Environment = Environment::Development;

/// Default log level.
pub const LOG_LEVEL: LogLevel = LogLevel::Info;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: i64 = 10;

/// Smallest valid port.
pub const PORT_MIN: i64 = 1;

/// Largest valid port.
pub const PORT_MAX: i64 = 65535;

/// Smallest valid timeout in seconds.
pub const TIMEOUT_MIN_SECS: i64 = 1;

/// Largest valid timeout in seconds.
pub const TIMEOUT_MAX_SECS: i64 = 300;

/// Prefix shared by every environment variable the server reads.
pub const ENV_PREFIX: &str = "OAUTH_PROXY_";
