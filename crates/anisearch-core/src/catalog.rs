//! Catalog item shape.
//!
//! Read-only data consumed by presentation code. The stores only ever keep
//! the `id` of these items.

use serde::{Deserialize, Serialize};

use crate::search::AnimeId;

/// An anime entry as served by the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub id: AnimeId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: f64,
    /// Category tags; unordered, no duplicates expected
    #[serde(rename = "Category", default)]
    pub categories: Vec<String>,
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Media type, e.g. `TV` or `Movie`
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "Episodes")]
    pub episodes: u32,
    #[serde(rename = "AirDate")]
    pub air_date: String,
    #[serde(rename = "EndDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "Image_URL")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_item() {
        let anime: Anime = serde_json::from_str(
            r#"{
                "id": 20,
                "Name": "Naruto",
                "Score": 8.0,
                "Category": ["Action", "Adventure"],
                "Description": "A young ninja.",
                "Type": "TV",
                "Episodes": 220,
                "AirDate": "2002-10-03",
                "EndDate": "2007-02-08",
                "Image_URL": "https://example.com/naruto.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(anime.id, 20);
        assert_eq!(anime.name, "Naruto");
        assert_eq!(anime.categories, vec!["Action", "Adventure"]);
        assert_eq!(anime.end_date.as_deref(), Some("2007-02-08"));
    }

    #[test]
    fn test_missing_end_date_is_omitted() {
        let anime: Anime = serde_json::from_str(
            r#"{
                "id": 1,
                "Name": "One Piece",
                "Score": 8.7,
                "Category": [],
                "Description": "",
                "Type": "TV",
                "Episodes": 1100,
                "AirDate": "1999-10-20",
                "Image_URL": ""
            }"#,
        )
        .unwrap();

        assert!(anime.end_date.is_none());
        assert!(!serde_json::to_string(&anime).unwrap().contains("EndDate"));
    }
}
