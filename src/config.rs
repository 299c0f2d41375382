use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

use dotenv::dotenv;
use thiserror::Error;
use tracing::info;

use crate::i18n::{Locale, UnknownLocale};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MEETINGS_LOCALE: {0}")]
    Locale(#[from] UnknownLocale),

    #[error("MEETINGS_TIMEOUT_SECS must be a whole number of seconds, got '{0}'")]
    Timeout(String),

    #[error("failed to read environment file: {0}")]
    File(#[from] dotenv::Error),
}

/// Client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub locale: Locale,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            locale: Locale::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load settings from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings from a specific env file, ignoring the process environment.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        for item in dotenv::from_path_iter(path)? {
            let (key, value) = item?;
            values.insert(key, value);
        }

        info!("Loaded {} settings from {}", values.len(), path.display());
        Self::from_lookup(|key| values.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("MEETINGS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let locale = match lookup("MEETINGS_LOCALE") {
            Some(raw) => raw.parse::<Locale>()?,
            None => Locale::default(),
        };

        let timeout = match lookup("MEETINGS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Timeout(raw))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            locale,
            timeout,
        })
    }
}
