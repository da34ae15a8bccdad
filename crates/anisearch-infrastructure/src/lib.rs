//! Infrastructure adapters for the Anisearch client cache.
//!
//! Provides the concrete durable storage adapters, the HTTP authentication
//! client, path resolution and configuration loading.

pub mod config;
pub mod http_auth_client;
pub mod paths;
pub mod storage;

pub use crate::config::ClientConfig;
pub use crate::http_auth_client::HttpAuthClient;
pub use crate::storage::{FilePersistenceAdapter, InMemoryPersistenceAdapter};
