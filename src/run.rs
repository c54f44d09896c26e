//! Command execution.
//!
//! Each subcommand writes its result to the given writer and reports a
//! [`Status`] that the entry point turns into an exit code.

use std::io::{self, Write};
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use oauth_proxy_config::address::Whitelist;
use oauth_proxy_config::config::defaults::ENV_PREFIX;
use oauth_proxy_config::config::env::var;
use oauth_proxy_config::config::{Cli, Command, OutputFormat, OutputKind, ServerConfig, mask_secret};
use oauth_proxy_config::render::{GeneratedOutput, render};
use oauth_proxy_config::validate::{ValidationError, validate};

use crate::app::exit_code;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to write command output.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Failed to encode JSON output.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The command completed and found nothing to report.
    Success,
    /// `validate` found at least one problem.
    Invalid,
    /// `check` found the address is not admitted.
    Denied,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => exit_code::SUCCESS,
            Status::Invalid => exit_code::CONFIG_ERROR,
            Status::Denied => exit_code::runtime_error(),
        }
    }
}

/// Printed when neither an API key nor an IP whitelist is configured.
const NO_AUTH_WARNING: &str =
    "no authentication method configured; set an API key or an IP whitelist";

/// Where the loaded configuration came from, as reported by `show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    /// Config file passed with `--config`, if any.
    pub config_file: Option<PathBuf>,
    /// Each `OAUTH_PROXY_*` variable with its value, `None` when unset or empty.
    pub env_vars: Vec<(String, Option<String>)>,
}

impl Sources {
    /// Captures the sources `cli` loaded from, reading the process environment
    /// unless `--no-env` was given.
    pub fn from_cli(cli: &Cli) -> Self {
        let env_vars = var::ALL
            .iter()
            .map(|suffix| {
                let name = format!("{ENV_PREFIX}{suffix}");
                let value = if cli.no_env {
                    None
                } else {
                    std::env::var(&name).ok().filter(|v| !v.is_empty())
                };
                (name, value)
            })
            .collect();

        Self {
            config_file: cli.config.clone(),
            env_vars,
        }
    }
}

/// Executes `command` against `config`, writing results to `out`.
///
/// `init` is handled by the entry point before configuration is loaded
/// and is a no-op here.
///
/// # Errors
///
/// Returns an error if output cannot be written or encoded.
pub fn execute<W: Write>(
    command: &Command,
    config: &ServerConfig,
    sources: &Sources,
    out: &mut W,
) -> Result<Status, RunError> {
    match command {
        Command::Render { format, only } => render_command(config, *format, *only, out),
        Command::Validate { format } => validate_command(config, *format, out),
        Command::Show => show_command(config, sources, out),
        Command::Check { ip } => check_command(config, *ip, out),
        Command::Init { .. } => Ok(Status::Success),
    }
}

fn render_command<W: Write>(
    config: &ServerConfig,
    format: OutputFormat,
    only: Option<OutputKind>,
    out: &mut W,
) -> Result<Status, RunError> {
    // Validation is advisory here; problems are logged and rendering proceeds
    for error in validate(config) {
        tracing::warn!("{error}");
    }
    if !config.has_auth_method() {
        tracing::warn!("{NO_AUTH_WARNING}");
    }

    let output = render(config);

    match (format, only) {
        (OutputFormat::Text, None) => write_sections(&output, out)?,
        (OutputFormat::Text, Some(kind)) => writeln!(out, "{}", select(&output, kind))?,
        (OutputFormat::Json, None) => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
        (OutputFormat::Json, Some(kind)) => {
            writeln!(out, "{}", serde_json::to_string(select(&output, kind))?)?;
        }
    }

    Ok(Status::Success)
}

fn select(output: &GeneratedOutput, kind: OutputKind) -> &str {
    match kind {
        OutputKind::Command => &output.command_line,
        OutputKind::Env => &output.environment_variables,
        OutputKind::File => &output.config_file,
    }
}

fn write_sections<W: Write>(output: &GeneratedOutput, out: &mut W) -> io::Result<()> {
    writeln!(out, "# Command line")?;
    writeln!(out, "{}", output.command_line)?;
    writeln!(out)?;
    writeln!(out, "# Environment variables")?;
    writeln!(out, "{}", output.environment_variables)?;
    writeln!(out)?;
    writeln!(out, "# Config file (config.yaml)")?;
    writeln!(out, "{}", output.config_file.trim_end())
}

fn validate_command<W: Write>(
    config: &ServerConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<Status, RunError> {
    let errors = validate(config);
    tracing::debug!("Validation found {} problem(s)", errors.len());

    match format {
        OutputFormat::Text => {
            write_errors(&errors, out)?;
            if !config.has_auth_method() {
                writeln!(out, "Warning: {NO_AUTH_WARNING}")?;
            }
        }
        OutputFormat::Json => {
            if !config.has_auth_method() {
                tracing::warn!("{NO_AUTH_WARNING}");
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
        }
    }

    Ok(if errors.is_empty() {
        Status::Success
    } else {
        Status::Invalid
    })
}

fn write_errors<W: Write>(errors: &[ValidationError], out: &mut W) -> io::Result<()> {
    if errors.is_empty() {
        return writeln!(out, "Configuration is valid");
    }

    writeln!(out, "Configuration has {} error(s):", errors.len())?;
    for (i, error) in errors.iter().enumerate() {
        writeln!(out, "  {}. {error}", i + 1)?;
    }
    Ok(())
}

/// Whitelist entries listed by `show` before the rest are summarized.
const SHOW_WHITELIST_LIMIT: usize = 5;

fn show_command<W: Write>(
    config: &ServerConfig,
    sources: &Sources,
    out: &mut W,
) -> Result<Status, RunError> {
    match &sources.config_file {
        Some(path) => writeln!(out, "Config file:  {}", path.display())?,
        None => writeln!(out, "Config file:  none (defaults and environment only)")?,
    }

    let api_key = config
        .masked_api_key()
        .unwrap_or_else(|| "not set".to_string());

    writeln!(out, "API key:      {api_key}")?;
    if config.ip_whitelist.is_empty() {
        writeln!(out, "IP whitelist: not set")?;
    } else {
        writeln!(out, "IP whitelist: {} rule(s)", config.ip_whitelist.len())?;
        for entry in config.ip_whitelist.iter().take(SHOW_WHITELIST_LIMIT) {
            writeln!(out, "  - {entry}")?;
        }
        if config.ip_whitelist.len() > SHOW_WHITELIST_LIMIT {
            writeln!(
                out,
                "  - ... and {} more",
                config.ip_whitelist.len() - SHOW_WHITELIST_LIMIT
            )?;
        }
    }
    writeln!(out, "Port:         {}", config.port)?;
    writeln!(out, "Environment:  {}", config.environment)?;
    writeln!(out, "Log level:    {}", config.log_level)?;
    writeln!(out, "Timeout:      {}s", config.timeout)?;

    write_env_vars(sources, out)?;
    Ok(Status::Success)
}

fn write_env_vars<W: Write>(sources: &Sources, out: &mut W) -> io::Result<()> {
    if sources.env_vars.is_empty() {
        return Ok(());
    }

    let api_key_var = format!("{ENV_PREFIX}{}", var::API_KEY);
    writeln!(out, "Environment variables:")?;
    for (name, value) in &sources.env_vars {
        match value {
            Some(value) if *name == api_key_var => {
                writeln!(out, "  {name}: {}", mask_secret(value))?;
            }
            Some(value) => writeln!(out, "  {name}: {value}")?,
            None => writeln!(out, "  {name}: not set")?,
        }
    }
    Ok(())
}

fn check_command<W: Write>(
    config: &ServerConfig,
    ip: IpAddr,
    out: &mut W,
) -> Result<Status, RunError> {
    let whitelist = Whitelist::from_entries(&config.ip_whitelist);

    if !whitelist.is_configured() {
        writeln!(out, "{ip} is allowed (no IP whitelist configured)")?;
        return Ok(Status::Success);
    }

    if whitelist.allows(&ip) {
        writeln!(out, "{ip} is allowed")?;
        Ok(Status::Success)
    } else {
        writeln!(out, "{ip} is denied")?;
        Ok(Status::Denied)
    }
}
