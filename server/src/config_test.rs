use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.public_dir.ends_with("public"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("PUBLIC_DIR", "/srv/asma"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/asma"));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn from_lookup_accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

#[test]
fn from_lookup_rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "http"));
}

#[test]
fn from_lookup_rejects_port_zero_and_overflow() {
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("PORT", "0")])),
        Err(ConfigError::InvalidPort { .. })
    ));
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort { .. })
    ));
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR 'localhost': expected an IP address");
}
