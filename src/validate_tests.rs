//! Tests for configuration validation.

use proptest::prelude::*;

use super::*;

fn config_with_whitelist(entries: &[&str]) -> ServerConfig {
    ServerConfig {
        ip_whitelist: entries.iter().map(ToString::to_string).collect(),
        ..ServerConfig::default()
    }
}

mod ranges {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&ServerConfig::default()).is_empty());
    }

    #[test]
    fn port_bounds() {
        for (port, valid) in [(0, false), (1, true), (65535, true), (65536, false), (-1, false)] {
            let config = ServerConfig {
                port,
                ..ServerConfig::default()
            };
            assert_eq!(validate(&config).is_empty(), valid, "port {port}");
        }
    }

    #[test]
    fn timeout_bounds() {
        for (timeout, valid) in [(0, false), (1, true), (300, true), (301, false)] {
            let config = ServerConfig {
                timeout,
                ..ServerConfig::default()
            };
            assert_eq!(validate(&config).is_empty(), valid, "timeout {timeout}");
        }
    }

    #[test]
    fn port_message() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };

        assert_eq!(
            validate(&config),
            vec![ValidationError {
                field: "port",
                message: "Port must be between 1 and 65535".to_string(),
            }]
        );
    }

    #[test]
    fn timeout_message() {
        let config = ServerConfig {
            timeout: 301,
            ..ServerConfig::default()
        };

        let errors = validate(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, field::TIMEOUT);
        assert_eq!(
            errors[0].message,
            "Timeout must be between 1 and 300 seconds"
        );
    }
}

mod whitelist {
    use super::*;

    #[test]
    fn valid_entries_produce_no_errors() {
        let config = config_with_whitelist(&["10.0.0.1", "192.168.1.0/24", "::1", "2001:db8::/32"]);
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn message_names_position_and_literal() {
        let config = config_with_whitelist(&["10.0.0.1", "not-an-ip"]);

        let errors = validate(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "ipWhitelist");
        assert_eq!(
            errors[0].message,
            "Invalid IP address or CIDR range at line 2: not-an-ip"
        );
    }

    #[test]
    fn each_bad_entry_gets_its_own_error() {
        let config = config_with_whitelist(&["bad1", "10.0.0.1", "bad2", "1.2.3.4/40"]);

        let messages: Vec<String> = validate(&config).into_iter().map(|e| e.message).collect();

        assert_eq!(messages.len(), 3);
        assert!(messages[0].ends_with("line 1: bad1"));
        assert!(messages[1].ends_with("line 3: bad2"));
        assert!(messages[2].ends_with("line 4: 1.2.3.4/40"));
    }

    #[test]
    fn entries_are_trimmed_before_checking() {
        let config = config_with_whitelist(&["  10.0.0.1  ", "\t::1\n"]);
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn blank_entries_are_skipped_but_counted() {
        let config = config_with_whitelist(&["", "   ", "oops"]);

        let errors = validate(&config);

        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("line 3: oops"));
    }

    #[test]
    fn message_keeps_untrimmed_literal() {
        let config = config_with_whitelist(&[" oops "]);
        assert!(validate(&config)[0].message.ends_with(":  oops "));
    }
}

mod ordering {
    use super::*;

    #[test]
    fn port_then_timeout_then_whitelist() {
        let config = ServerConfig {
            port: 70000,
            timeout: 0,
            ip_whitelist: vec!["x".to_string(), "y".to_string()],
            ..ServerConfig::default()
        };

        let fields: Vec<&str> = validate(&config).iter().map(|e| e.field).collect();

        assert_eq!(fields, vec!["port", "timeout", "ipWhitelist", "ipWhitelist"]);
    }

    #[test]
    fn bad_port_and_entry_yield_exactly_two_errors() {
        let config = ServerConfig {
            api_key: Some("anything".to_string()),
            ip_whitelist: vec!["not-an-ip".to_string()],
            port: 70000,
            environment: crate::config::Environment::Production,
            log_level: crate::config::LogLevel::Debug,
            timeout: 120,
        };

        let fields: Vec<&str> = validate(&config).iter().map(|e| e.field).collect();

        assert_eq!(fields, vec![field::PORT, field::IP_WHITELIST]);
    }

    #[test]
    fn display_includes_field_and_message() {
        let error = ValidationError::new(field::PORT, "Port must be between 1 and 65535");
        assert_eq!(error.to_string(), "port: Port must be between 1 and 65535");
    }
}

proptest! {
    #[test]
    fn port_error_iff_out_of_range(port in -100_000_i64..200_000) {
        let config = ServerConfig { port, ..ServerConfig::default() };
        let has_error = validate(&config).iter().any(|e| e.field == field::PORT);
        prop_assert_eq!(has_error, !(1..=65535).contains(&port));
    }

    #[test]
    fn timeout_error_iff_out_of_range(timeout in -1_000_i64..1_000) {
        let config = ServerConfig { timeout, ..ServerConfig::default() };
        let has_error = validate(&config).iter().any(|e| e.field == field::TIMEOUT);
        prop_assert_eq!(has_error, !(1..=300).contains(&timeout));
    }

    #[test]
    fn never_panics_on_arbitrary_entries(entries in prop::collection::vec(".*", 0..8)) {
        let config = ServerConfig { ip_whitelist: entries, ..ServerConfig::default() };
        let _ = validate(&config);
    }
}
