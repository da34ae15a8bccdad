//! Durable storage binding for a single store.
//!
//! This module provides `StoreBinding` which implements the "hydrate at
//! start, write-through on every mutation" lifecycle on top of a
//! [`PersistenceAdapter`].

use anisearch_core::storage::PersistenceAdapter;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Current persisted document version for both stores.
pub const STORE_VERSION: u32 = 0;

/// Stored document layout: `{"state": <payload>, "version": <n>}`.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

/// Binds a store to one key of a persistence adapter.
///
/// Persistence problems never reach store callers: unreadable documents
/// hydrate as "nothing stored" and failed writes are logged, leaving the
/// in-memory state authoritative.
#[derive(Clone)]
pub struct StoreBinding {
    key: String,
    version: u32,
    adapter: Arc<dyn PersistenceAdapter>,
}

impl StoreBinding {
    /// Creates a binding for `key` at the current store version.
    pub fn new(key: impl Into<String>, adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            key: key.into(),
            version: STORE_VERSION,
            adapter,
        }
    }

    /// Overrides the document version written and accepted by this binding.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted payload.
    ///
    /// Returns `None` when nothing is stored, when the stored document cannot
    /// be read or parsed, or when it was written by a different version.
    pub async fn hydrate<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match self.adapter.load(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("[StoreBinding] Nothing stored under '{}'", self.key);
                return None;
            }
            Err(e) => {
                tracing::warn!("[StoreBinding] Failed to load '{}': {}", self.key, e);
                return None;
            }
        };

        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(
                    "[StoreBinding] Ignoring unreadable document under '{}': {}",
                    self.key,
                    e
                );
                return None;
            }
        };

        if envelope.version != self.version {
            tracing::warn!(
                "[StoreBinding] Ignoring '{}' stored at version {} (expected {})",
                self.key,
                envelope.version,
                self.version
            );
            return None;
        }

        Some(envelope.state)
    }

    /// Writes the payload through to durable storage.
    pub async fn persist<T: Serialize>(&self, state: &T) {
        let envelope = Envelope {
            state,
            version: self.version,
        };

        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("[StoreBinding] Failed to serialize '{}': {}", self.key, e);
                return;
            }
        };

        if let Err(e) = self.adapter.save(&self.key, raw).await {
            tracing::warn!("[StoreBinding] Failed to persist '{}': {}", self.key, e);
        }
    }
}
