//! Compiles a [`ServerConfig`] into its three textual representations.
//!
//! Rendering happens in two steps:
//!
//! 1. [`included_fields`] decides once which fields differ from their
//!    defaults and fixes their order.
//! 2. Three independent builders turn that list into text:
//!    [`command_line`], [`environment_variables`] and [`config_file`].
//!
//! Sharing step 1 keeps default suppression and field order identical
//! across formats. Rendering never fails and never validates: an
//! out-of-range port or a malformed whitelist entry is emitted verbatim.
//!
//! # Field Order
//!
//! `api_key`, `ip_whitelist`, `port`, `environment`, `log_level`, `timeout`.
//! Whitelist entries keep their input order.

mod command;
mod document;
mod env;
mod field;


use serde::Serialize;

use crate::config::ServerConfig;

pub use command::{PROGRAM, command_line};
pub use document::{EMPTY_DOCUMENT, config_file};
pub use env::{EMPTY_ENVIRONMENT, environment_variables};
pub use field::{FieldValue, IncludedField, included_fields};

/// The three rendered representations of one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedOutput {
    /// Server invocation with one flag per non-default field
    pub command_line: String,
    /// `export OAUTH_PROXY_*` lines, one per non-default field
    pub environment_variables: String,
    /// YAML config file holding the non-default fields
    pub config_file: String,
}

/// Renders all three representations of `config`.
///
/// # Examples
///
/// ```
/// use oauth_proxy_config::config::ServerConfig;
/// use oauth_proxy_config::render::render;
///
/// let config = ServerConfig { port: 9090, ..ServerConfig::default() };
/// let output = render(&config);
///
/// assert_eq!(output.command_line, "./gmail-oauth-proxy server --port 9090");
/// assert_eq!(output.environment_variables, "export OAUTH_PROXY_PORT=9090");
/// assert_eq!(output.config_file, "port: 9090\n");
/// ```
#[must_use]
pub fn render(config: &ServerConfig) -> GeneratedOutput {
    let fields = included_fields(config);

    GeneratedOutput {
        command_line: command_line(&fields),
        environment_variables: environment_variables(&fields),
        config_file: config_file(&fields),
    }
}
