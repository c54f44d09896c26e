//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.
//! Field flags are global so they can be given before or after the
//! subcommand.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::{Environment, LogLevel};

/// Compiles Gmail OAuth proxy server settings into a ready-to-paste
/// command line, environment variable block and YAML config file.
#[derive(Debug, Parser)]
#[command(name = "oauth-proxy-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to a YAML (or .toml) configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// API key clients must present
    #[arg(long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// Allowed address or CIDR network (can be specified multiple times)
    #[arg(long = "ip-whitelist", value_name = "ADDR", global = true)]
    pub ip_whitelist: Vec<String>,

    /// Listening port
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub port: Option<i64>,

    /// Runtime environment
    #[arg(long = "env", value_enum, global = true)]
    pub environment: Option<EnvironmentArg>,

    /// Log level
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Request timeout in seconds
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub timeout: Option<i64>,

    /// Ignore OAUTH_PROXY_* environment variables
    #[arg(long = "no-env", global = true)]
    pub no_env: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for oauth-proxy-config
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the command line, environment variables and config file
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print only one of the rendered outputs
        #[arg(long, value_enum)]
        only: Option<OutputKind>,
    },

    /// Check the configuration and report every problem found
    Validate {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the resolved configuration with the API key masked
    Show,

    /// Check whether the IP whitelist admits a client address
    Check {
        /// Client address to test
        ip: IpAddr,
    },

    /// Generate a commented configuration file template
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "config.yaml")]
        output: PathBuf,
    },
}

/// Format for printed results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Selects a single rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// The server command line
    Command,
    /// The environment variable block
    Env,
    /// The YAML config file
    File,
}

/// Environment argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentArg {
    /// Development mode
    Development,
    /// Production mode
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Development => Self::Development,
            EnvironmentArg::Production => Self::Production,
        }
    }
}

/// Log level argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    /// Debug output
    Debug,
    /// Informational output
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Error => Self::Error,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
