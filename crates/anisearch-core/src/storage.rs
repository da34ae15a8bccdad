//! Durable key-value storage trait.

use async_trait::async_trait;

use crate::error::Result;

/// Storage key of the auth store's persisted subset.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Storage key of the search store's snapshot.
pub const SEARCH_STORAGE_KEY: &str = "anime-search-storage";

/// Durable string key-value store that shadows in-memory state across
/// restarts.
///
/// Each store binds to one key; values are serialized JSON documents.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Loads the value stored under `key`, or `None` if nothing was stored.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn save(&self, key: &str, value: String) -> Result<()>;
}
