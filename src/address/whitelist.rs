//! Client admission against a list of whitelist entries.

use std::net::IpAddr;

use super::AddressOrNetwork;

/// A parsed IP whitelist.
///
/// Built from the raw entries of a configuration, matching how the proxy
/// server treats its own whitelist at request time. Blank entries match no
/// client and malformed entries are skipped with a warning. Any entry at
/// all, blank or malformed, makes the whitelist configured, so a list of
/// only such entries admits nobody.
///
/// # Examples
///
/// ```
/// use oauth_proxy_config::address::Whitelist;
///
/// let whitelist = Whitelist::from_entries(&["192.168.1.0/24", "::1"]);
/// assert!(whitelist.allows(&"192.168.1.77".parse().unwrap()));
/// assert!(whitelist.allows(&"::1".parse().unwrap()));
/// assert!(!whitelist.allows(&"10.0.0.1".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    rules: Vec<AddressOrNetwork>,
    configured: bool,
}

impl Whitelist {
    /// Parses whitelist entries, skipping blank and malformed ones.
    #[must_use]
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let rules = entries
            .iter()
            .map(|entry| entry.as_ref().trim())
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match entry.parse::<AddressOrNetwork>() {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!("Ignoring whitelist entry '{entry}': {e}");
                    None
                }
            })
            .collect();

        Self {
            rules,
            configured: !entries.is_empty(),
        }
    }

    /// Returns `true` if `ip` may connect.
    ///
    /// A whitelist built from no entries admits every client.
    #[must_use]
    pub fn allows(&self, ip: &IpAddr) -> bool {
        if !self.configured {
            return true;
        }

        match self.rules.iter().find(|rule| rule.contains(ip)) {
            Some(rule) => {
                tracing::debug!("Client IP {ip} matches {rule}");
                true
            }
            None => {
                tracing::debug!("Client IP {ip} matches no whitelist rule");
                false
            }
        }
    }

    /// Returns the parsed rules in input order.
    #[must_use]
    pub fn rules(&self) -> &[AddressOrNetwork] {
        &self.rules
    }

    /// Returns true if at least one entry was supplied.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }

    /// Returns true if no usable rules were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of usable rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
