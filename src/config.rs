use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("cannot parse listen address {0:?}")]
    InvalidAddr(String),
    #[error("no fallback port above {0}")]
    NoFallbackPort(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads HOST, PORT, STATIC_DIR and ACTIVITIES_SEED_PATH from the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidPort(v))?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let seed_path = lookup("ACTIVITIES_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
            seed_path,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr(&self.host, self.port)
    }

    // Retried once when the primary port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let Some(port) = self.port.checked_add(1) else {
            return Err(ConfigError::NoFallbackPort(self.port));
        };
        socket_addr(&self.host, port)
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let raw = format!("{}:{}", host, port);
    raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
}
