//! Search snapshot domain model.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item.
pub type AnimeId = i64;

/// Sort mode used until the user picks another one.
pub const DEFAULT_SORT_METHOD: &str = "score_desc";

/// The complete state of the last search.
///
/// All three fields are replaced together; there is no partial snapshot.
/// Wire names match the documents the web client persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    /// Matching item ids, in the order given by `sort_method`
    #[serde(rename = "animeIds")]
    pub result_ids: Vec<AnimeId>,

    /// Query text that produced `result_ids`
    #[serde(rename = "searchKeyword")]
    pub keyword: String,

    /// Open-ended sort token such as `score_desc`; never validated
    #[serde(rename = "sortMethod")]
    pub sort_method: String,
}

impl Default for SearchSnapshot {
    fn default() -> Self {
        Self {
            result_ids: Vec::new(),
            keyword: String::new(),
            sort_method: DEFAULT_SORT_METHOD.to_string(),
        }
    }
}

impl SearchSnapshot {
    pub fn new(
        result_ids: Vec<AnimeId>,
        keyword: impl Into<String>,
        sort_method: impl Into<String>,
    ) -> Self {
        Self {
            result_ids,
            keyword: keyword.into(),
            sort_method: sort_method.into(),
        }
    }

    /// Returns true if this snapshot equals the empty defaults.
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}
