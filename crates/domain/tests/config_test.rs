use ferrous_ns_domain::{CliOverrides, Config, ConfigError};
use std::net::Ipv4Addr;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert!(config.resolution.mitm.is_none());
    assert!(config.resolution.zone_file.is_none());
    assert_eq!(config.upstream.url, "https://dns.google/resolve");
    assert_eq!(config.upstream.timeout_secs, 5);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml_partial() {
    let config = Config::from_toml(
        r#"
        [server]
        port = 5353

        [resolution]
        mitm = "10.0.0.1"
        zone_file = "/etc/zones/example.zone"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 5353);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.resolution.mitm, Some(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(
        config.resolution.zone_file.as_deref(),
        Some("/etc/zones/example.zone")
    );
    assert_eq!(config.upstream.timeout_secs, 5);
}

#[test]
fn test_config_from_toml_invalid() {
    let err = Config::from_toml("[server]\nport = \"fifty-three\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        port: Some(10053),
        bind_address: Some("127.0.0.1".to_string()),
        mitm: Some(Ipv4Addr::new(192, 168, 0, 66)),
        zone_file: Some("zone.txt".to_string()),
        upstream_url: Some("https://cloudflare-dns.com/dns-query".to_string()),
        log_level: Some("debug".to_string()),
    });

    assert_eq!(config.server.port, 10053);
    assert_eq!(config.server.listen_addr(), "127.0.0.1:10053");
    assert_eq!(config.resolution.mitm, Some(Ipv4Addr::new(192, 168, 0, 66)));
    assert_eq!(config.resolution.zone_file.as_deref(), Some("zone.txt"));
    assert_eq!(config.upstream.url, "https://cloudflare-dns.com/dns-query");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_empty_overrides_keep_values() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides::default());
    assert_eq!(config.server.port, 53);
    assert!(config.resolution.mitm.is_none());
}

#[test]
fn test_ipv6_listen_addr_is_bracketed() {
    let mut config = Config::default();
    config.server.bind_address = "::".to_string();
    assert_eq!(config.server.listen_addr(), "[::]:53");
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_bad_upstream() {
    let mut config = Config::default();
    config.upstream.url = "dns.google".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.upstream.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_explicit_missing_file() {
    let err = Config::load(Some("/nonexistent/ferrous-ns.toml"), CliOverrides::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_, _)));
}
