//! Server configuration loaded from the environment.
//!
//! Only the bind address is configurable. The seasonal multiplier table is
//! compiled in (see [`crate::pricing::models::Season`]).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{AppError, Result};

/// Default port the pricing service listens on
pub const DEFAULT_PORT: u16 = 5004;

/// Bind address for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load from `HOST` / `PORT`, reading an optional `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unset or blank variables fall back to the defaults; set but
    /// unparseable ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| AppError::Config(format!("HOST '{}' is not an IP address: {}", raw, e)))?,
            None => defaults.host,
        };

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT '{}' is not a valid port: {}", raw, e)))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
