//! Typed whitelist entries: a single address or a CIDR network.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

/// Largest prefix length for an IPv4 network.
const IPV4_MAX_PREFIX: u8 = 32;

/// Largest prefix length for an IPv6 network.
const IPV6_MAX_PREFIX: u8 = 128;

/// Reason a string is not a valid address or network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input was empty.
    #[error("empty address")]
    Empty,

    /// The address part is not an IPv4 or IPv6 literal.
    #[error("'{0}' is not an IPv4 or IPv6 address")]
    InvalidAddress(String),

    /// The prefix part is not an unsigned decimal number.
    #[error("'{0}' is not a valid prefix length")]
    InvalidPrefix(String),

    /// The prefix is larger than the address family allows.
    #[error("prefix length {prefix} exceeds maximum of {max}")]
    PrefixOutOfRange {
        /// The parsed prefix length
        prefix: u32,
        /// Maximum for the address family
        max: u8,
    },
}

/// A parsed whitelist entry.
///
/// # Examples
///
/// ```
/// use oauth_proxy_config::address::AddressOrNetwork;
///
/// let entry: AddressOrNetwork = "10.0.0.0/8".parse().unwrap();
/// assert!(entry.contains(&"10.1.2.3".parse().unwrap()));
/// assert!(!entry.contains(&"11.0.0.1".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressOrNetwork {
    /// A single host address.
    Address(IpAddr),
    /// A CIDR network.
    Network {
        /// Network address as written (host bits are not cleared)
        address: IpAddr,
        /// Number of leading bits that identify the network
        prefix_len: u8,
    },
}

impl AddressOrNetwork {
    /// Returns `true` if `ip` is this address or falls inside this network.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are compared as IPv4.
    /// Addresses of different families never match.
    #[must_use]
    pub fn contains(&self, ip: &IpAddr) -> bool {
        let ip = ip.to_canonical();
        match *self {
            Self::Address(address) => address.to_canonical() == ip,
            Self::Network {
                address,
                prefix_len,
            } => prefix_matches(address, ip, prefix_len),
        }
    }

    /// Returns the address part of the entry.
    #[must_use]
    pub const fn address(&self) -> IpAddr {
        match *self {
            Self::Address(address) | Self::Network { address, .. } => address,
        }
    }
}

impl FromStr for AddressOrNetwork {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        let Some((address, prefix)) = s.split_once('/') else {
            return parse_ip(s).map(Self::Address);
        };

        let address = parse_ip(address)?;
        let prefix = parse_prefix(prefix)?;
        let max = max_prefix(address);

        match u8::try_from(prefix) {
            Ok(prefix_len) if prefix_len <= max => Ok(Self::Network {
                address,
                prefix_len,
            }),
            _ => Err(AddressError::PrefixOutOfRange { prefix, max }),
        }
    }
}

impl fmt::Display for AddressOrNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{address}"),
            Self::Network {
                address,
                prefix_len,
            } => write!(f, "{address}/{prefix_len}"),
        }
    }
}

fn parse_ip(s: &str) -> Result<IpAddr, AddressError> {
    // std rejects zone ids and IPv4 octets with leading zeros
    s.parse::<IpAddr>()
        .map_err(|_| AddressError::InvalidAddress(s.to_string()))
}

fn parse_prefix(s: &str) -> Result<u32, AddressError> {
    // Integer FromStr accepts a leading '+', a prefix must be bare digits
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidPrefix(s.to_string()));
    }

    // Digit-only strings only fail to parse on overflow
    Ok(s.parse::<u32>().unwrap_or(u32::MAX))
}

const fn max_prefix(address: IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => IPV4_MAX_PREFIX,
        IpAddr::V6(_) => IPV6_MAX_PREFIX,
    }
}

fn prefix_matches(network: IpAddr, ip: IpAddr, prefix_len: u8) -> bool {
    match (network, ip) {
        (IpAddr::V4(net), IpAddr::V4(ip)) => leading_bits_equal(
            u128::from(u32::from(net)),
            u128::from(u32::from(ip)),
            u32::from(IPV4_MAX_PREFIX),
            prefix_len,
        ),
        (IpAddr::V6(net), IpAddr::V6(ip)) => leading_bits_equal(
            u128::from(net),
            u128::from(ip),
            u32::from(IPV6_MAX_PREFIX),
            prefix_len,
        ),
        _ => false,
    }
}

/// Compares the top `prefix_len` bits of two `width`-bit values.
fn leading_bits_equal(a: u128, b: u128, width: u32, prefix_len: u8) -> bool {
    if prefix_len == 0 {
        return true;
    }
    let shift = width.saturating_sub(u32::from(prefix_len));
    (a >> shift) == (b >> shift)
}
