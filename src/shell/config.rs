use std::{env, net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "HALL_PASS_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "HALL_PASS_DATA_DIR";
pub const LOG_VAR: &str = "HALL_PASS_LOG";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_DIR: &str = "./hall_pass_data";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a socket address: '{value}'")]
    InvalidBindAddr { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Runtime settings for the station binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                key: BIND_ADDR_VAR,
                value: bind_raw.clone(),
            })?;

        let data_dir = lookup(DATA_DIR_VAR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::Empty { key: DATA_DIR_VAR });
        }

        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            data_dir: PathBuf::from(data_dir.trim()),
            log_filter,
        })
    }
}
