//! Startup configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Hours table location used when `BAKERY_HOURS_PATH` is unset.
pub const DEFAULT_HOURS_PATH: &str = "bakery_hours.json";

/// Read-only configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Listening port. The server binds all interfaces.
    pub port: u16,

    /// Where the weekly hours table lives.
    pub hours_path: PathBuf,
}

impl NodeConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let hours_path = lookup("BAKERY_HOURS_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HOURS_PATH));

        Ok(Self { port, hours_path })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            hours_path: PathBuf::from(DEFAULT_HOURS_PATH),
        }
    }
}
