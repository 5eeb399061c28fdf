use std::env;
use std::path::PathBuf;

use crate::error::AdminError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub search_debounce_ms: u64,
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AdminError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "https://api.carelink.example".to_string()),
            request_timeout_secs: parse_or_default("REQUEST_TIMEOUT_SECS", 30)?,
            search_debounce_ms: parse_or_default("SEARCH_DEBOUNCE_MS", 500)?,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".carelink")),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AdminError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AdminError::Decode(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
