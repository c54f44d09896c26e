//! OAuth Proxy Config: settings compiler for the Gmail OAuth proxy server
//!
//! A library for validating proxy server settings and rendering them as a
//! command line, an environment variable block and a YAML config file.
//!
//! - [`address`]: IPv4/IPv6 address and CIDR syntax, whitelist matching
//! - [`validate`]: field-scoped validation diagnostics
//! - [`render`]: the three rendered representations
//! - [`config`]: the configuration value and the sources it is loaded from

pub mod address;
pub mod config;
pub mod render;
pub mod validate;
