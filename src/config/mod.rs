//! Configuration layer for the proxy server settings.
//!
//! This module provides:
//! - The configuration value itself ([`ServerConfig`], [`Environment`], [`LogLevel`])
//! - Default values ([`defaults`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Config file parsing ([`ConfigFile`]) in YAML or TOML
//! - `OAUTH_PROXY_*` environment variables ([`EnvOverlay`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment variables** - `OAUTH_PROXY_API_KEY`, `OAUTH_PROXY_PORT`, ...
//! 3. **Config file** - Values from the YAML or TOML file
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The IP whitelist uses "replace" semantics: the highest-priority source
//! with a non-empty list supplies the whole list.
//!
//! Loading never checks domain rules. A port of 70000 loads fine and is
//! reported later by [`validate`](crate::validate::validate).

mod cli;
pub mod defaults;
pub mod env;
mod error;
mod file;
mod model;
mod resolve;


pub use cli::{Cli, Command, EnvironmentArg, LogLevelArg, OutputFormat, OutputKind};
pub use env::EnvOverlay;
pub use error::ConfigError;
pub use file::{ConfigFile, FileFormat, default_config_template, write_default_config};
pub use model::{Environment, LogLevel, ServerConfig, UnknownVariant, mask_secret};
