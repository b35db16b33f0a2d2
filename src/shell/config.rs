use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const CACHE_DIR_VAR: &str = "EVENT_OVERVIEW_CACHE_DIR";
pub const BIND_ADDR_VAR: &str = "EVENT_OVERVIEW_BIND_ADDR";

const DEFAULT_CACHE_DIR: &str = "./.event-overview-cache";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cache_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Loads an optional `.env` first, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let raw_bind_addr = non_blank(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_bind_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_bind_addr.clone(),
            })?;

        Ok(Self {
            cache_dir: non_blank(CACHE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            bind_addr,
        })
    }
}
