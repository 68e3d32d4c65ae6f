// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DB_PATH: &str = "paintflow.sqlite3";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PAINTFLOW_ADDR '{0}': {1}")]
    InvalidAddr(String, std::net::AddrParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub workers: usize,
    /// `None` disables enrichment; leads are stored without a summary.
    pub gemini: Option<GeminiConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get("PAINTFLOW_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|e| ConfigError::InvalidAddr(raw_addr.clone(), e))?;

        let gemini = get("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            timeout: Duration::from_secs(number_or(
                "GEMINI_TIMEOUT_SECS",
                get("GEMINI_TIMEOUT_SECS"),
                DEFAULT_GEMINI_TIMEOUT_SECS,
            )),
        });

        Ok(Self {
            addr,
            db_path: get("PAINTFLOW_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            workers: number_or("PAINTFLOW_WORKERS", get("PAINTFLOW_WORKERS"), DEFAULT_WORKERS),
            gemini,
        })
    }
}

/// Parse a positive number, falling back to `default` (with a warning) when
/// the value is present but unusable.
fn number_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(n) if n > T::default() => n,
        _ => {
            warn!(key, value = %raw, "ignoring invalid setting, using default");
            default
        }
    }
}
