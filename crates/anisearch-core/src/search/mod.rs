//! Search result caching domain.
//!
//! Holds the snapshot of the most recent query: the ordered result ids, the
//! keyword that produced them, and the sort mode they are ordered by.

pub mod model;

pub use model::{AnimeId, DEFAULT_SORT_METHOD, SearchSnapshot};
