//! Merging configuration sources into a [`ServerConfig`].
//!
//! Each field is taken from the highest-priority source that sets it:
//! CLI arguments, then `OAUTH_PROXY_*` environment variables, then the
//! config file, then built-in defaults. No domain validation happens here.

use super::cli::Cli;
use super::defaults;
use super::env::EnvOverlay;
use super::error::ConfigError;
use super::file::ConfigFile;
use super::model::ServerConfig;

impl ServerConfig {
    /// Creates a configuration from CLI arguments, an optional config file
    /// and an environment overlay.
    ///
    /// Whitelists are replaced, not merged: the first source with a
    /// non-empty whitelist wins.
    #[must_use]
    pub fn from_sources(cli: &Cli, file: Option<&ConfigFile>, env: &EnvOverlay) -> Self {
        let api_key = cli
            .api_key
            .clone()
            .or_else(|| env.api_key.clone())
            .or_else(|| file.and_then(|f| f.api_key.clone()));

        let ip_whitelist = Self::resolve_whitelist(cli, file, env);

        let port = cli
            .port
            .or(env.port)
            .or_else(|| file.and_then(|f| f.port))
            .unwrap_or(defaults::PORT);

        let environment = cli
            .environment
            .map(Into::into)
            .or(env.environment)
            .or_else(|| file.and_then(|f| f.environment))
            .unwrap_or(defaults::ENVIRONMENT);

        let log_level = cli
            .log_level
            .map(Into::into)
            .or(env.log_level)
            .or_else(|| file.and_then(|f| f.log_level))
            .unwrap_or(defaults::LOG_LEVEL);

        let timeout = cli
            .timeout
            .or(env.timeout)
            .or_else(|| file.and_then(|f| f.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        Self {
            api_key,
            ip_whitelist,
            port,
            environment,
            log_level,
            timeout,
        }
    }

    /// Loads and merges configuration from CLI, environment and config file.
    ///
    /// If `cli.config` is set, loads the file from that path. The process
    /// environment is skipped when `cli.no_env` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - An `OAUTH_PROXY_*` variable holds an unparsable value
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = if let Some(ref path) = cli.config {
            Some(ConfigFile::load(path)?)
        } else {
            None
        };

        let env = if cli.no_env {
            EnvOverlay::default()
        } else {
            EnvOverlay::from_process()?
        };

        Ok(Self::from_sources(cli, file.as_ref(), &env))
    }

    fn resolve_whitelist(cli: &Cli, file: Option<&ConfigFile>, env: &EnvOverlay) -> Vec<String> {
        if !cli.ip_whitelist.is_empty() {
            return cli.ip_whitelist.clone();
        }

        let non_empty = |list: &Vec<String>| !list.is_empty();
        env.ip_whitelist
            .clone()
            .filter(non_empty)
            .or_else(|| file.and_then(|f| f.ip_whitelist.clone()).filter(non_empty))
            .unwrap_or_default()
    }
}
