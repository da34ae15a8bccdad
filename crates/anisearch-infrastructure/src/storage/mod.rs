//! Durable storage adapters for the client stores.

mod atomic_file;
mod file_adapter;
mod memory_adapter;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use file_adapter::FilePersistenceAdapter;
pub use memory_adapter::InMemoryPersistenceAdapter;
