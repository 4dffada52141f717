use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::core::models::DEFAULT_TTL;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// Attempts per upstream call, including the first, handled by the SDK retry policy.
pub const UPSTREAM_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub bind_addr: SocketAddr,
    pub cache_ttl: Duration,
    pub max_attempts: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("MODELS_CACHE_TTL_SECONDS must be a non-negative whole number of seconds, got {0:?}")]
    InvalidTtl(String),
}

/// Command-line overrides applied on top of the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub region: Option<String>,
    pub bind: Option<String>,
}

/// Load configuration from environment, then apply CLI overrides.
pub fn load(overrides: &Overrides) -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok(), overrides)
}

fn load_from<F>(var: F, overrides: &Overrides) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| var(key).filter(|s| !s.trim().is_empty());

    let region = overrides
        .region
        .clone()
        .or_else(|| non_empty("AWS_REGION"))
        .or_else(|| non_empty("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    let bind = overrides
        .bind
        .clone()
        .or_else(|| non_empty("MODELS_BIND_ADDR"))
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddr {
            value: bind.clone(),
            source,
        })?;

    let cache_ttl = match non_empty("MODELS_CACHE_TTL_SECONDS") {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| u64::try_from(secs).ok())
            .map(Duration::from_secs)
            .ok_or(ConfigError::InvalidTtl(raw))?,
        None => DEFAULT_TTL,
    };

    Ok(Config {
        region,
        bind_addr,
        cache_ttl,
        max_attempts: UPSTREAM_MAX_ATTEMPTS,
    })
}
