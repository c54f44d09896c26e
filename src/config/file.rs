//! Configuration file parsing.
//!
//! The file schema is the same document the compiler emits, so a rendered
//! config file can be loaded back unchanged. Files ending in `.toml` are
//! parsed as TOML, everything else as YAML.

use std::path::Path;

use serde::Deserialize;

use super::{ConfigError, Environment, LogLevel};

/// Configuration file contents.
///
/// All fields are optional to allow partial configuration
/// that can be merged with environment variables and CLI arguments.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// API key clients must present
    pub api_key: Option<String>,

    /// Addresses or CIDR networks allowed to connect
    pub ip_whitelist: Option<Vec<String>>,

    /// Listening port
    pub port: Option<i64>,

    /// Runtime environment: "development" or "production"
    pub environment: Option<Environment>,

    /// Log level: "debug", "info", "warn" or "error"
    pub log_level: Option<LogLevel>,

    /// Request timeout in seconds
    pub timeout: Option<i64>,
}

/// Syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// YAML document (the server's native format)
    Yaml,
    /// TOML document
    Toml,
}

impl FileFormat {
    /// Picks the format from a file extension, defaulting to YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl ConfigFile {
    /// Loads configuration from a YAML or TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let format = FileFormat::from_path(path);
        tracing::debug!("Parsing {} as {format:?}", path.display());
        Self::parse(&content, format)
    }

    /// Parses configuration from a string in the given format.
    ///
    /// A document holding only comments and blank lines yields an empty
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is invalid or has unknown keys.
    pub fn parse(content: &str, format: FileFormat) -> Result<Self, ConfigError> {
        if is_blank_document(content) {
            return Ok(Self::default());
        }

        match format {
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(ConfigError::from),
            FileFormat::Toml => toml::from_str(content).map_err(ConfigError::from),
        }
    }
}

fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r"# Gmail OAuth Proxy Server Configuration
# Every key is optional. Uncomment a line to override the default.
# Environment variables (OAUTH_PROXY_*) and command-line flags take precedence.

# API key clients must send with each request
# api_key: your-api-key

# Addresses or CIDR networks allowed to connect (IPv4 or IPv6)
# ip_whitelist:
#   - 192.168.1.0/24
#   - 10.0.0.1
#   - ::1

# Listening port, 1-65535 (default: 8080)
# port: 8080

# Runtime environment: development or production (default: development)
# environment: development

# Log level: debug, info, warn or error (default: info)
# log_level: info

# Request timeout in seconds, 1-300 (default: 10)
# timeout: 10
"
    .to_string()
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
