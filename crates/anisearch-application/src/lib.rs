//! Application layer for Anisearch.
//!
//! This crate provides the two client-side state stores and the binding that
//! keeps them mirrored to durable storage:
//!
//! - [`AuthStore`]: session cache plus the login / register / change-password
//!   flows
//! - [`SearchStore`]: snapshot of the last search
//!
//! # Wiring
//!
//! ```ignore
//! let search = Arc::new(SearchStore::hydrate(adapter.clone()).await);
//! let auth = AuthStore::hydrate(client, adapter)
//!     .await
//!     .with_logout_listener(search.clone());
//! ```

pub mod auth_store;
pub mod binding;
pub mod search_store;

pub use auth_store::AuthStore;
pub use binding::{STORE_VERSION, StoreBinding};
pub use search_store::SearchStore;
