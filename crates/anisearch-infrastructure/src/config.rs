//! Client configuration loading.
//!
//! Reads `~/.config/anisearch/config.toml`; a missing file yields defaults.
//! The API base URL can be overridden with `ANISEARCH_API_URL`.

use crate::paths::AnisearchPaths;
use anisearch_core::error::{AnisearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const API_URL_ENV: &str = "ANISEARCH_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Root configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the authentication service.
    pub api_base_url: String,

    /// Directory for the durable store mirror. Defaults to the platform
    /// data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Fallback log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads the configuration from the default location and applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = AnisearchPaths::config_file()
            .map_err(|e| AnisearchError::config(format!("Failed to get config path: {}", e)))?;

        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads the configuration from a specific file.
    ///
    /// A missing or blank file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("[ClientConfig] No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies overrides looked up through `lookup` (normally the process
    /// environment).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            tracing::info!("[ClientConfig] {} set, using {}", API_URL_ENV, url);
            self.api_base_url = url;
        }
    }

    /// Resolves the storage directory, falling back to the platform default.
    pub fn resolve_storage_dir(&self) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => AnisearchPaths::storage_dir().map_err(|e| {
                AnisearchError::config(format!("Failed to get storage directory: {}", e))
            }),
        }
    }
}
