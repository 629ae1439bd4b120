//! Runtime configuration: RON file, then environment, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use marquee_engine::FetchSettings;
use marquee_logging::marquee_info;
use serde::Deserialize;

use super::cli::Cli;

pub const DEFAULT_CONFIG_FILENAME: &str = "marquee.ron";
pub const ENV_API_KEY: &str = "MARQUEE_API_KEY";
pub const ENV_BASE_URL: &str = "MARQUEE_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let defaults = FetchSettings::default();
        Self {
            base_url: defaults.base_url,
            api_key: defaults.api_key,
            language: defaults.language,
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
            max_bytes: defaults.max_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Where the theme preference is remembered between runs.
    pub prefs_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            prefs_path: PathBuf::from(".marquee_prefs.ron"),
        }
    }
}

impl AppConfig {
    /// Load from `explicit` (must exist) or from `./marquee.ron` when present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = ron::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        marquee_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.api.api_key = key;
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(key) = &cli.api_key {
            self.api.api_key = key.clone();
        }
        if let Some(url) = &cli.base_url {
            self.api.base_url = url.clone();
        }
        if let Some(language) = &cli.language {
            self.api.language = language.clone();
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.api.base_url.clone(),
            api_key: self.api.api_key.clone(),
            language: self.api.language.clone(),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.api.request_timeout_secs),
            max_bytes: self.api.max_bytes,
        }
    }
}
