//! Process configuration, read once from the environment at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Read `HOST` and `PORT`; unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("HOST") {
            config.host = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "HOST",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = lookup("PORT") {
            config.port = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
