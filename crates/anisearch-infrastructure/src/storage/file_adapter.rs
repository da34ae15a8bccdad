//! File-backed persistence adapter.
//!
//! Stores each key as one JSON document under a storage directory, written
//! atomically through [`AtomicFile`].

use super::atomic_file::{AtomicFile, AtomicFileError};
use crate::paths::{AnisearchPaths, PathError};
use anisearch_core::error::{AnisearchError, Result};
use anisearch_core::storage::PersistenceAdapter;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Persistence adapter that writes `<dir>/<key>.json` files.
///
/// Blocking file I/O runs on the blocking thread pool so store operations
/// never stall the async runtime.
///
/// # Example
///
/// ```ignore
/// use anisearch_infrastructure::storage::FilePersistenceAdapter;
///
/// let adapter = FilePersistenceAdapter::with_default_dir()?;
/// adapter.save("auth-storage", "{...}".to_string()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FilePersistenceAdapter {
    dir: PathBuf,
}

impl FilePersistenceAdapter {
    /// Creates an adapter rooted at the given directory.
    ///
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates an adapter rooted at the platform storage directory.
    pub fn with_default_dir() -> std::result::Result<Self, PathError> {
        Ok(Self::new(AnisearchPaths::storage_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the document path for a key.
    ///
    /// Keys are restricted to a conservative character set so they can never
    /// escape the storage directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(AnisearchError::storage(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }

        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn map_file_error(key: &str, err: AtomicFileError) -> AnisearchError {
    match err {
        AtomicFileError::IoError(e) => AnisearchError::io(format!("{} ({})", e, key)),
        AtomicFileError::LockError(e) => AnisearchError::storage(format!("{} ({})", e, key)),
    }
}

#[async_trait]
impl PersistenceAdapter for FilePersistenceAdapter {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let file = AtomicFile::new(self.path_for(key)?);
        let key_owned = key.to_string();

        tokio::task::spawn_blocking(move || file.load().map_err(|e| map_file_error(&key_owned, e)))
            .await
            .map_err(|e| AnisearchError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        let file = AtomicFile::new(self.path_for(key)?);
        let key_owned = key.to_string();

        tracing::trace!("[FilePersistenceAdapter] Saving {:?}", file.path());

        tokio::task::spawn_blocking(move || {
            file.save(&value).map_err(|e| map_file_error(&key_owned, e))
        })
        .await
        .map_err(|e| AnisearchError::internal(format!("Failed to join task: {}", e)))?
    }
}
