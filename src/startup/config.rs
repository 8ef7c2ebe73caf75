//! Runtime configuration.
//!
//! Values come from the environment ([`AppConfig::from_env`]) and are then
//! overridden by command-line flags through the `with_*` builder methods.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::retrieval::DEFAULT_BASE_URL;

pub const ENV_SEARCH_URL: &str = "QH_SEARCH_URL";
pub const ENV_QURAN_DATASET: &str = "QH_QURAN_DATASET";
pub const ENV_HADITH_DATASET: &str = "QH_HADITH_DATASET";
pub const ENV_LOG_FILE: &str = "QH_LOG_FILE";
pub const ENV_LOG: &str = "QH_LOG";
pub const ENV_SKIP_HEALTH: &str = "QH_SKIP_HEALTH";

/// Directory name used under the platform data and cache dirs.
pub const APP_DIR: &str = "qh-search";
pub const QURAN_DATASET_FILE: &str = "AL_Quran_Dataset.json";
pub const HADITH_DATASET_FILE: &str = "Sahih_Bukhari_Dataset.json";
pub const LOG_FILE_NAME: &str = "qh-search.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for one run of the application.
///
/// ```
/// use qh_search::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_search_url("http://search.local:9000")
///     .with_skip_health_check(true);
/// assert_eq!(config.search_url, "http://search.local:9000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the retrieval service
    pub search_url: String,
    pub quran_dataset: PathBuf,
    pub hadith_dataset: PathBuf,
    /// Log destination for the TUI
    pub log_file: PathBuf,
    /// `EnvFilter` directive, e.g. `info` or `qh_search=debug`
    pub log_filter: String,
    /// Skip the background `/health` probe
    pub skip_health_check: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            search_url: DEFAULT_BASE_URL.to_string(),
            quran_dataset: data_dir.join(QURAN_DATASET_FILE),
            hadith_dataset: data_dir.join(HADITH_DATASET_FILE),
            log_file: default_cache_dir().join(LOG_FILE_NAME),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            skip_health_check: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `QH_*` environment variables.
    ///
    /// Unset or blank variables fall back to defaults. `QH_SKIP_HEALTH`
    /// accepts `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = get(ENV_SEARCH_URL) {
            config = config.with_search_url(url);
        }
        if let Some(path) = get(ENV_QURAN_DATASET) {
            config = config.with_quran_dataset(path);
        }
        if let Some(path) = get(ENV_HADITH_DATASET) {
            config = config.with_hadith_dataset(path);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(value) = get(ENV_SKIP_HEALTH) {
            config = config.with_skip_health_check(parse_flag(ENV_SKIP_HEALTH, &value)?);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_quran_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.quran_dataset = path.into();
        self
    }

    pub fn with_hadith_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.hadith_dataset = path.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_skip_health_check(mut self, skip: bool) -> Self {
        self.skip_health_check = skip;
        self
    }

    /// Reject a search URL that is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.search_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                ENV_SEARCH_URL,
                format!("expected an http(s) URL, got '{}'", url),
            ));
        }
        Ok(())
    }

    pub fn datasets(&self) -> (&Path, &Path) {
        (&self.quran_dataset, &self.hadith_dataset)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(
            name,
            format!("expected a boolean, got '{}'", other),
        )),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}
