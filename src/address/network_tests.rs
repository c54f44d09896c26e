//! Tests for address and network parsing.

use std::net::IpAddr;

use super::{AddressError, AddressOrNetwork, is_valid_address_or_network};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

mod validity {
    use super::*;

    #[test]
    fn accepts_documented_literals() {
        assert!(is_valid_address_or_network("192.168.1.0/24"));
        assert!(is_valid_address_or_network("192.168.1.100"));
        assert!(is_valid_address_or_network("::1"));
        assert!(is_valid_address_or_network("2001:db8::/32"));
    }

    #[test]
    fn rejects_documented_literals() {
        assert!(!is_valid_address_or_network("256.1.1.1"));
        assert!(!is_valid_address_or_network("192.168.1.0/33"));
    }

    #[test]
    fn accepts_ipv4_boundaries() {
        assert!(is_valid_address_or_network("0.0.0.0"));
        assert!(is_valid_address_or_network("255.255.255.255"));
        assert!(is_valid_address_or_network("0.0.0.0/0"));
        assert!(is_valid_address_or_network("10.0.0.0/32"));
    }

    #[test]
    fn rejects_malformed_ipv4() {
        assert!(!is_valid_address_or_network("1.2.3"));
        assert!(!is_valid_address_or_network("1.2.3.4.5"));
        assert!(!is_valid_address_or_network("1.2.3."));
        assert!(!is_valid_address_or_network("a.b.c.d"));
        assert!(!is_valid_address_or_network("1.2.3.-4"));
    }

    #[test]
    fn rejects_ipv4_leading_zeros() {
        assert!(!is_valid_address_or_network("192.168.001.1"));
        assert!(!is_valid_address_or_network("01.2.3.4"));
    }

    #[test]
    fn accepts_canonical_and_abbreviated_ipv6() {
        assert!(is_valid_address_or_network(
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334"
        ));
        assert!(is_valid_address_or_network("::"));
        assert!(is_valid_address_or_network("::1"));
        assert!(is_valid_address_or_network("fe80::1"));
        assert!(is_valid_address_or_network("2001:db8::8a2e:370:7334"));
        assert!(is_valid_address_or_network("::ffff:192.168.1.1"));
    }

    #[test]
    fn accepts_ipv6_networks_up_to_128() {
        assert!(is_valid_address_or_network("::/0"));
        assert!(is_valid_address_or_network("fd00::/8"));
        assert!(is_valid_address_or_network("::1/128"));
        assert!(!is_valid_address_or_network("::1/129"));
    }

    #[test]
    fn rejects_malformed_ipv6() {
        assert!(!is_valid_address_or_network("2001:db8::85a3::7334"));
        assert!(!is_valid_address_or_network("12345::"));
        assert!(!is_valid_address_or_network("gggg::1"));
        assert!(!is_valid_address_or_network("1:2:3:4:5:6:7:8:9"));
        assert!(!is_valid_address_or_network("fe80::1%eth0"));
    }

    #[test]
    fn rejects_bad_prefixes() {
        assert!(!is_valid_address_or_network("10.0.0.0/"));
        assert!(!is_valid_address_or_network("10.0.0.0/-1"));
        assert!(!is_valid_address_or_network("10.0.0.0/+8"));
        assert!(!is_valid_address_or_network("10.0.0.0/8a"));
        assert!(!is_valid_address_or_network("10.0.0.0/8/8"));
        assert!(!is_valid_address_or_network("10.0.0.0/99999999999"));
        assert!(!is_valid_address_or_network("/24"));
    }

    #[test]
    fn rejects_non_addresses() {
        assert!(!is_valid_address_or_network(""));
        assert!(!is_valid_address_or_network("not-an-ip"));
        assert!(!is_valid_address_or_network("localhost"));
        assert!(!is_valid_address_or_network(" 10.0.0.1"));
    }

    #[test]
    fn repeated_calls_agree() {
        for value in ["10.0.0.1", "bogus", "::/0", "1.1.1.1/40"] {
            assert_eq!(
                is_valid_address_or_network(value),
                is_valid_address_or_network(value)
            );
        }
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parses_single_address() {
        let entry: AddressOrNetwork = "10.0.0.1".parse().unwrap();
        assert_eq!(entry, AddressOrNetwork::Address(ip("10.0.0.1")));
        assert_eq!(entry.address(), ip("10.0.0.1"));
    }

    #[test]
    fn parses_network() {
        let entry: AddressOrNetwork = "2001:db8::/32".parse().unwrap();
        assert_eq!(
            entry,
            AddressOrNetwork::Network {
                address: ip("2001:db8::"),
                prefix_len: 32,
            }
        );
    }

    #[test]
    fn empty_input_error() {
        assert_eq!("".parse::<AddressOrNetwork>(), Err(AddressError::Empty));
    }

    #[test]
    fn invalid_address_error_names_input() {
        let err = "300.0.0.1/8".parse::<AddressOrNetwork>().unwrap_err();
        assert_eq!(err, AddressError::InvalidAddress("300.0.0.1".to_string()));
    }

    #[test]
    fn invalid_prefix_error_names_input() {
        let err = "10.0.0.0/x".parse::<AddressOrNetwork>().unwrap_err();
        assert_eq!(err, AddressError::InvalidPrefix("x".to_string()));
    }

    #[test]
    fn out_of_range_prefix_error() {
        let err = "10.0.0.0/33".parse::<AddressOrNetwork>().unwrap_err();
        assert_eq!(err, AddressError::PrefixOutOfRange { prefix: 33, max: 32 });
        assert_eq!(err.to_string(), "prefix length 33 exceeds maximum of 32");
    }

    #[test]
    fn display_round_trips() {
        for value in ["10.0.0.1", "192.168.0.0/16", "::1", "2001:db8::/32"] {
            let entry: AddressOrNetwork = value.parse().unwrap();
            assert_eq!(entry.to_string(), value);
        }
    }
}

mod containment {
    use super::*;

    #[test]
    fn address_matches_only_itself() {
        let entry: AddressOrNetwork = "10.0.0.1".parse().unwrap();
        assert!(entry.contains(&ip("10.0.0.1")));
        assert!(!entry.contains(&ip("10.0.0.2")));
    }

    #[test]
    fn ipv4_network_matches_prefix() {
        let entry: AddressOrNetwork = "192.168.1.0/24".parse().unwrap();
        assert!(entry.contains(&ip("192.168.1.0")));
        assert!(entry.contains(&ip("192.168.1.255")));
        assert!(!entry.contains(&ip("192.168.2.1")));
    }

    #[test]
    fn host_bits_in_network_are_ignored() {
        let entry: AddressOrNetwork = "192.168.1.77/24".parse().unwrap();
        assert!(entry.contains(&ip("192.168.1.1")));
    }

    #[test]
    fn zero_prefix_matches_whole_family() {
        let v4: AddressOrNetwork = "0.0.0.0/0".parse().unwrap();
        let v6: AddressOrNetwork = "::/0".parse().unwrap();
        assert!(v4.contains(&ip("203.0.113.9")));
        assert!(v6.contains(&ip("2001:db8::1")));
        assert!(!v4.contains(&ip("2001:db8::1")));
        assert!(!v6.contains(&ip("203.0.113.9")));
    }

    #[test]
    fn ipv6_network_matches_prefix() {
        let entry: AddressOrNetwork = "2001:db8::/32".parse().unwrap();
        assert!(entry.contains(&ip("2001:db8:ffff::1")));
        assert!(!entry.contains(&ip("2001:db9::1")));
    }

    #[test]
    fn full_length_prefix_matches_single_host() {
        let entry: AddressOrNetwork = "::1/128".parse().unwrap();
        assert!(entry.contains(&ip("::1")));
        assert!(!entry.contains(&ip("::2")));
    }

    #[test]
    fn ipv4_mapped_client_matches_ipv4_rule() {
        let entry: AddressOrNetwork = "10.0.0.0/8".parse().unwrap();
        assert!(entry.contains(&ip("::ffff:10.1.2.3")));

        let single: AddressOrNetwork = "10.1.2.3".parse().unwrap();
        assert!(single.contains(&ip("::ffff:10.1.2.3")));
    }
}
