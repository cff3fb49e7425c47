//! Host configuration parsed from environment variables.
//!
//! Recognized:
//! - `PORT`: listen port, default 3000
//! - `BIND_ADDR`: listen address, default `0.0.0.0`
//! - `PUBLIC_DIR`: static asset fallback directory, default `<crate>/public`
//!
//! Leptos reads its own `LEPTOS_*` settings through `get_configuration`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("invalid BIND_ADDR '{value}': expected an IP address")]
    InvalidBindAddr { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or blank keys
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => parse_port(&raw)?,
        };
        let bind_addr = match var("BIND_ADDR") {
            None => DEFAULT_BIND_ADDR,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidBindAddr { value: raw })?,
        };
        let public_dir = var("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);

        Ok(Self { port, bind_addr, public_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
