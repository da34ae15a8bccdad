//! Domain layer of the Anisearch client cache.
//!
//! Contains the session and search snapshot models, the shared error type,
//! and the interfaces the stores consume: the remote authentication client
//! and the durable storage adapter.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod search;
pub mod storage;

// Re-export common error type
pub use error::{AnisearchError, Result};
