//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by `dotenvy` at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote movie catalog
#[derive(Debug, Clone, PartialEq)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub request_timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    /// Directory holding the persisted key-value files
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty("TMDB_API_KEY").ok_or_else(|| {
            AppError::ConfigurationError("TMDB_API_KEY is not set".to_string())
        })?;

        let mut tmdb = TmdbConfig::new(api_key.trim());

        if let Some(base_url) = non_empty("TMDB_BASE_URL") {
            tmdb = tmdb.with_base_url(base_url.trim());
        }
        if let Some(image_base_url) = non_empty("TMDB_IMAGE_BASE_URL") {
            tmdb.image_base_url = image_base_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(language) = non_empty("TMDB_LANGUAGE") {
            tmdb.language = language.trim().to_string();
        }
        if let Some(timeout) = non_empty("TMDB_TIMEOUT_SECS") {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                AppError::ConfigurationError(format!(
                    "TMDB_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
            if secs == 0 {
                return Err(AppError::ConfigurationError(
                    "TMDB_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            tmdb.request_timeout = Duration::from_secs(secs);
        }

        let data_dir = non_empty("MOVIEDECK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Ok(Self { tmdb, data_dir })
    }
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moviedeck");
    path
}
