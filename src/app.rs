//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use oauth_proxy_config::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes, so scripts can tell a bad config from a refused address.
pub mod exit_code {
    use std::process::ExitCode;

    /// 0: the command ran and had nothing to complain about.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// 1: a source could not be loaded, `init` failed, or `validate`
    /// reported errors.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// 2: `check` denied the address, or stdout could not be written.
    // `ExitCode::from` is not const
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'oauth-proxy-config init' to generate a configuration template.");
        }
        ConfigError::InvalidEnvValue { .. } => {
            eprintln!("\nUnset the variable or pass --no-env to ignore OAUTH_PROXY_* variables.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so rendered output on stdout stays copy-pasteable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
