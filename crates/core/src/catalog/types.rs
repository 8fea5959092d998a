//! Types for the podcast catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One podcast in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PodcastEntry {
    /// Stable identifier, unique within a catalog snapshot.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Show description.
    #[serde(default)]
    pub description: String,
    /// Number of seasons.
    #[serde(default)]
    pub seasons: u32,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Last-updated timestamp as delivered by the source (RFC 3339).
    pub updated: String,
    /// Genre ids, referencing the genre index.
    #[serde(default)]
    pub genres: Vec<u32>,
}

impl PodcastEntry {
    /// Parse the `updated` field into a comparable instant.
    ///
    /// Returns `None` when the source delivered something unparsable; the
    /// sort stage treats those entries as the earliest possible instant.
    pub fn updated_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.updated)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn entry_updated(updated: &str) -> PodcastEntry {
        PodcastEntry {
            id: "1".to_string(),
            title: "Test Show".to_string(),
            description: String::new(),
            seasons: 1,
            image: String::new(),
            updated: updated.to_string(),
            genres: vec![],
        }
    }

    #[test]
    fn test_updated_instant_parses_rfc3339() {
        let entry = entry_updated("2023-11-03T07:00:00.000Z");
        let instant = entry.updated_instant().unwrap();
        assert_eq!(instant.year(), 2023);
        assert_eq!(instant.month(), 11);
        assert_eq!(instant.day(), 3);
    }

    #[test]
    fn test_updated_instant_garbage_is_none() {
        let entry = entry_updated("not a timestamp");
        assert!(entry.updated_instant().is_none());
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = PodcastEntry {
            id: "10716".to_string(),
            title: "Something Was Wrong".to_string(),
            description: "A docuseries about survivors.".to_string(),
            seasons: 14,
            image: "https://example.com/cover.jpg".to_string(),
            updated: "2022-11-03T07:00:00.000Z".to_string(),
            genres: vec![1, 2],
        };

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: PodcastEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_entry_deserialize_with_missing_optionals() {
        let json = r#"{"id": "5", "title": "Bare", "updated": "2024-01-01T00:00:00Z"}"#;
        let parsed: PodcastEntry = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.id, "5");
        assert_eq!(parsed.seasons, 0);
        assert!(parsed.genres.is_empty());
    }
}
