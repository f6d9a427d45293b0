//! # Movie
//!
//! The only domain entity. `imdb_id` is the natural key of the catalog.
//!
//! The serialized names follow the catalog JSON files (`imgUrl`, `imdbUrl`,
//! `imdbId`), so seed catalogs load without any renaming step.

use serde::{Deserialize, Serialize};

/// A catalog entry. Immutable once constructed: fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    title: String,
    #[serde(default)]
    description: String,
    img_url: String,
    imdb_url: String,
    imdb_id: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        img_url: impl Into<String>,
        imdb_url: impl Into<String>,
        imdb_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            img_url: img_url.into(),
            imdb_url: imdb_url.into(),
            imdb_id: imdb_id.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    pub fn imdb_url(&self) -> &str {
        &self.imdb_url
    }

    pub fn imdb_id(&self) -> &str {
        &self.imdb_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "title": "Inception",
            "description": "Dreams within dreams",
            "imgUrl": "https://x.com/i.png",
            "imdbUrl": "https://imdb.com/tt1",
            "imdbId": "tt1"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title(), "Inception");
        assert_eq!(movie.img_url(), "https://x.com/i.png");
        assert_eq!(movie.imdb_id(), "tt1");
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let json = r#"{"title":"A","imgUrl":"https://a.io","imdbUrl":"https://b.io","imdbId":"tt9"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.description(), "");
    }

    #[test]
    fn test_serialize_uses_catalog_names() {
        let movie = Movie::new("T", "", "https://a.io", "https://b.io", "tt2");
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["imdbId"], "tt2");
        assert_eq!(value["imgUrl"], "https://a.io");
        assert!(value.get("imdb_id").is_none());
    }
}
