//! Unified path management for anisearch files.
//!
//! All paths are resolved through the `dirs` crate so that the layout follows
//! platform conventions (XDG on Linux, Application Support on macOS, AppData
//! on Windows).

use std::path::PathBuf;

const APP_DIR_NAME: &str = "anisearch";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for anisearch.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/anisearch/              # Config directory
/// └── config.toml                   # Client configuration
///
/// ~/.local/share/anisearch/         # Data directory
/// └── storage/                      # Durable store mirror
///     ├── auth-storage.json
///     └── anime-search-storage.json
/// ```
pub struct AnisearchPaths;

impl AnisearchPaths {
    /// Returns the anisearch configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the anisearch data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the persisted store documents.
    pub fn storage_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage"))
    }
}
