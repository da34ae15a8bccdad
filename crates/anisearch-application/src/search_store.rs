//! Search result store.
//!
//! Caches the last query's snapshot and mirrors every change, in full, to
//! durable storage under `anime-search-storage`.

use crate::binding::StoreBinding;
use anisearch_core::auth::LogoutListener;
use anisearch_core::search::{AnimeId, SearchSnapshot};
use anisearch_core::storage::{PersistenceAdapter, SEARCH_STORAGE_KEY};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// Holds the most recent search snapshot.
///
/// Every mutation replaces the whole snapshot at once. Subscribers are
/// notified on every replacement, including replacing a cleared snapshot
/// with another cleared one.
pub struct SearchStore {
    state: watch::Sender<SearchSnapshot>,
    /// Keeps memory and storage updates in the same order.
    write_lock: Mutex<()>,
    binding: StoreBinding,
}

impl SearchStore {
    /// Creates the store, restoring the snapshot from durable storage.
    ///
    /// Falls back to the empty default snapshot when nothing usable is stored.
    pub async fn hydrate(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        let binding = StoreBinding::new(SEARCH_STORAGE_KEY, adapter);
        let snapshot = binding.hydrate::<SearchSnapshot>().await.unwrap_or_default();

        tracing::debug!(
            "[SearchStore] Hydrated: keyword={:?}, results={}, sort={}",
            snapshot.keyword,
            snapshot.result_ids.len(),
            snapshot.sort_method
        );

        let (state, _) = watch::channel(snapshot);
        Self {
            state,
            write_lock: Mutex::new(()),
            binding,
        }
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribes to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state.subscribe()
    }

    /// Replaces the snapshot with the given results.
    ///
    /// Neither the ids nor the sort token are validated or reordered.
    pub async fn set_search_results(
        &self,
        result_ids: Vec<AnimeId>,
        keyword: impl Into<String>,
        sort_method: impl Into<String>,
    ) {
        let snapshot = SearchSnapshot::new(result_ids, keyword, sort_method);
        tracing::debug!(
            "[SearchStore] set_search_results: keyword={:?}, results={}, sort={}",
            snapshot.keyword,
            snapshot.result_ids.len(),
            snapshot.sort_method
        );
        self.replace(snapshot).await;
    }

    /// Resets the snapshot to the empty defaults.
    pub async fn clear_search_results(&self) {
        tracing::debug!("[SearchStore] clear_search_results");
        self.replace(SearchSnapshot::default()).await;
    }

    async fn replace(&self, snapshot: SearchSnapshot) {
        let _guard = self.write_lock.lock().await;
        self.state.send_replace(snapshot.clone());
        self.binding.persist(&snapshot).await;
    }

    /// Writes whatever is in memory now, after any in-flight write.
    async fn sync_storage(&self) {
        let _guard = self.write_lock.lock().await;
        let current = self.snapshot();
        self.binding.persist(&current).await;
    }
}

#[async_trait]
impl LogoutListener for SearchStore {
    /// Resets memory without waiting on the write lock.
    fn on_logout(&self) {
        tracing::debug!("[SearchStore] Reset on logout");
        self.state.send_replace(SearchSnapshot::default());
    }

    async fn after_logout(&self) {
        self.sync_storage().await;
    }
}
