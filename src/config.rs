// config.rs
use crate::data::DataSource;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8051";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_WEEKDAYS_SOURCE: &str =
    "https://zenodo.org/records/4446043/files/london_weekdays.csv";
pub const DEFAULT_WEEKENDS_SOURCE: &str =
    "https://zenodo.org/records/4446043/files/london_weekends.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidWorkers { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub weekdays: DataSource,
    pub weekends: DataSource,
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let addr_raw = get("DASHBOARD_ADDR", DEFAULT_ADDR);
        let addr = addr_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "DASHBOARD_ADDR",
                value: addr_raw.clone(),
            })?;

        let workers_raw = get("DASHBOARD_WORKERS", &DEFAULT_WORKERS.to_string());
        let max_workers = match workers_raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(ConfigError::InvalidWorkers {
                    var: "DASHBOARD_WORKERS",
                    value: workers_raw,
                })
            }
        };

        Ok(Self {
            addr,
            max_workers,
            weekdays: DataSource::parse(&get("DASHBOARD_WEEKDAYS_SOURCE", DEFAULT_WEEKDAYS_SOURCE)),
            weekends: DataSource::parse(&get("DASHBOARD_WEEKENDS_SOURCE", DEFAULT_WEEKENDS_SOURCE)),
        })
    }
}
