//! Store configuration.
//!
//! Two values select the operating mode: the remote store endpoint and its
//! access key. When both are present the app talks to the remote store;
//! when either is missing it falls back to demo mode. Missing configuration
//! is the documented fallback trigger, never an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Environment variable holding the remote store endpoint.
pub const STORE_URL_ENV: &str = "SCHOOLHELPER_STORE_URL";

/// Environment variable holding the remote store access key.
pub const STORE_KEY_ENV: &str = "SCHOOLHELPER_STORE_KEY";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Remote store endpoint, e.g. `https://xyz.supabase.co`.
    pub store_url: Option<String>,
    /// Remote store access key (the anon/publishable key).
    pub store_key: Option<String>,
}

impl Config {
    /// Load configuration from the environment, overlaid on an optional
    /// `schoolhelper.toml` file. Environment variables win over the file.
    ///
    /// When `path` is `None` the default location
    /// `<config dir>/schoolhelper/config.toml` is tried; a missing file is
    /// fine, a malformed one is a configuration error.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let file_path = path.map(PathBuf::from).or_else(default_config_path);

        let mut config = match file_path {
            Some(p) if p.exists() => {
                tracing::debug!(path = %p.display(), "loading config file");
                let raw = std::fs::read_to_string(&p)?;
                toml::from_str(&raw)
                    .map_err(|e| CoreError::Config(format!("{}: {}", p.display(), e)))?
            }
            _ => Config::default(),
        };

        if let Some(url) = env_value(STORE_URL_ENV) {
            config.store_url = Some(url);
        }
        if let Some(key) = env_value(STORE_KEY_ENV) {
            config.store_key = Some(key);
        }

        Ok(config)
    }

    /// True when both endpoint and key are present (live mode).
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Endpoint and key as a pair, when both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.store_url.as_deref(), self.store_key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Some((url, key)),
            _ => None,
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("schoolhelper").join("config.toml"))
}
