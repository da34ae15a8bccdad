mod support;

use anisearch_application::SearchStore;
use anisearch_core::search::SearchSnapshot;
use anisearch_core::storage::SEARCH_STORAGE_KEY;
use anisearch_infrastructure::{FilePersistenceAdapter, InMemoryPersistenceAdapter};
use std::sync::Arc;
use support::FailingAdapter;
use tempfile::TempDir;

#[tokio::test]
async fn test_set_then_read_is_exact() {
    let store = SearchStore::hydrate(Arc::new(InMemoryPersistenceAdapter::new())).await;

    store
        .set_search_results(vec![3, 1, 2], "naruto", "score_asc")
        .await;

    assert_eq!(
        store.snapshot(),
        SearchSnapshot {
            result_ids: vec![3, 1, 2],
            keyword: "naruto".to_string(),
            sort_method: "score_asc".to_string(),
        }
    );
}

#[tokio::test]
async fn test_set_replaces_whole_snapshot() {
    let store = SearchStore::hydrate(Arc::new(InMemoryPersistenceAdapter::new())).await;
    store
        .set_search_results(vec![1, 2, 3, 4], "gundam", "score_asc")
        .await;

    store.set_search_results(vec![8], "eva", "score_desc").await;

    assert_eq!(store.snapshot(), SearchSnapshot::new(vec![8], "eva", "score_desc"));
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let store = SearchStore::hydrate(Arc::new(InMemoryPersistenceAdapter::new())).await;
    store.set_search_results(vec![1], "k", "score_asc").await;

    store.clear_search_results().await;
    let first = store.snapshot();
    store.clear_search_results().await;
    let second = store.snapshot();

    assert_eq!(first, SearchSnapshot::default());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let adapter = InMemoryPersistenceAdapter::new();
    {
        let store = SearchStore::hydrate(Arc::new(adapter.clone())).await;
        store
            .set_search_results(vec![3, 1, 2], "naruto", "score_asc")
            .await;
    }

    let restarted = SearchStore::hydrate(Arc::new(adapter)).await;

    assert_eq!(
        restarted.snapshot(),
        SearchSnapshot::new(vec![3, 1, 2], "naruto", "score_asc")
    );
}

#[tokio::test]
async fn test_snapshot_survives_restart_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = SearchStore::hydrate(Arc::new(FilePersistenceAdapter::new(temp_dir.path()))).await;
        store
            .set_search_results(vec![42, 7], "frieren", "score_desc")
            .await;
    }

    let restarted =
        SearchStore::hydrate(Arc::new(FilePersistenceAdapter::new(temp_dir.path()))).await;

    assert_eq!(
        restarted.snapshot(),
        SearchSnapshot::new(vec![42, 7], "frieren", "score_desc")
    );
    assert!(
        temp_dir
            .path()
            .join(format!("{}.json", SEARCH_STORAGE_KEY))
            .exists()
    );
}

#[tokio::test]
async fn test_hydrates_web_client_document() {
    let adapter = InMemoryPersistenceAdapter::new();
    adapter
        .insert_raw(
            SEARCH_STORAGE_KEY,
            r#"{"state":{"animeIds":[5,4],"searchKeyword":"mecha","sortMethod":"score_asc"},"version":0}"#,
        )
        .await;

    let store = SearchStore::hydrate(Arc::new(adapter)).await;

    assert_eq!(store.snapshot(), SearchSnapshot::new(vec![5, 4], "mecha", "score_asc"));
}

#[tokio::test]
async fn test_corrupt_document_hydrates_defaults() {
    let adapter = InMemoryPersistenceAdapter::new();
    adapter.insert_raw(SEARCH_STORAGE_KEY, "not json at all").await;

    let store = SearchStore::hydrate(Arc::new(adapter)).await;

    assert!(store.snapshot().is_cleared());
}

#[tokio::test]
async fn test_storage_failure_keeps_memory_state() {
    let store = SearchStore::hydrate(Arc::new(FailingAdapter)).await;

    store.set_search_results(vec![1], "k", "score_asc").await;

    assert_eq!(store.snapshot(), SearchSnapshot::new(vec![1], "k", "score_asc"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_keep_storage_in_step() {
    let adapter = InMemoryPersistenceAdapter::new();
    let store = Arc::new(SearchStore::hydrate(Arc::new(adapter.clone())).await);

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .set_search_results(vec![i], format!("query-{}", i), "score_desc")
                .await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Last write wins, and the durable mirror agrees with memory.
    let restarted = SearchStore::hydrate(Arc::new(adapter)).await;
    assert_eq!(restarted.snapshot(), store.snapshot());
}
