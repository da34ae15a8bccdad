//! In-memory persistence adapter.

use anisearch_core::error::Result;
use anisearch_core::storage::PersistenceAdapter;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Persistence adapter backed by a shared in-memory map.
///
/// Clones share the same map, so a clone handed to freshly constructed
/// stores behaves like durable storage surviving a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistenceAdapter {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPersistenceAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value for a key.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Writes a raw value, bypassing any store.
    pub async fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PersistenceAdapter for InMemoryPersistenceAdapter {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key).await)
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
