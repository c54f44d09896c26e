//! Address and network syntax for IP whitelist entries.
//!
//! This module provides:
//! - Syntactic validation of single addresses and CIDR networks
//!   ([`is_valid_address_or_network`])
//! - A typed representation of a whitelist entry ([`AddressOrNetwork`])
//! - Client admission against a list of entries ([`Whitelist`])
//!
//! # Accepted Syntax
//!
//! - **IPv4**: four dot-separated decimal octets in `0..=255`. Octets with
//!   leading zeros (`192.168.001.1`) are rejected.
//! - **IPv6**: the full textual form, including `::` zero-run compression at
//!   any position and an embedded IPv4 tail (`::ffff:10.0.0.1`). Zone ids
//!   (`fe80::1%eth0`) are rejected.
//! - **CIDR**: `<address>/<prefix>` where the prefix is an unsigned decimal
//!   no larger than 32 (IPv4) or 128 (IPv6).
//!
//! Validation is purely syntactic; no name resolution is ever performed.

mod network;
mod whitelist;

#[cfg(test)]
mod network_tests;

pub use network::{AddressError, AddressOrNetwork};
pub use whitelist::Whitelist;

/// Returns `true` if `value` is a valid IPv4/IPv6 address or CIDR network.
///
/// The input is expected to be a single, already trimmed token.
///
/// # Examples
///
/// ```
/// use oauth_proxy_config::address::is_valid_address_or_network;
///
/// assert!(is_valid_address_or_network("192.168.1.0/24"));
/// assert!(is_valid_address_or_network("2001:db8::/32"));
/// assert!(!is_valid_address_or_network("192.168.1.0/33"));
/// assert!(!is_valid_address_or_network("256.1.1.1"));
/// ```
#[must_use]
pub fn is_valid_address_or_network(value: &str) -> bool {
    value.parse::<AddressOrNetwork>().is_ok()
}
