//! Static genre index.
//!
//! Maps the small-integer genre ids carried by catalog entries to
//! human-readable names. The index is built once at startup and immutable
//! for the process lifetime.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::PodcastEntry;

/// A single genre, id plus display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Genre id as used in `PodcastEntry::genres`.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Static id-to-name lookup table for genres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreIndex {
    genres: Vec<Genre>,
}

/// The genres the default catalog source ships with.
static BUILTIN_GENRES: Lazy<GenreIndex> = Lazy::new(|| {
    GenreIndex::new(
        [
            (1, "Personal Growth"),
            (2, "Investigative Journalism"),
            (3, "History"),
            (4, "Comedy"),
            (5, "Entertainment"),
            (6, "Business"),
            (7, "Fiction"),
            (8, "News"),
            (9, "Kids and Family"),
        ]
        .into_iter()
        .map(|(id, name)| Genre {
            id,
            name: name.to_string(),
        })
        .collect(),
    )
});

impl GenreIndex {
    /// Build an index from a list of genres.
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }

    /// The compiled-in index matching the default catalog source.
    pub fn builtin() -> Self {
        BUILTIN_GENRES.clone()
    }

    /// All genres, in index order.
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Look up a genre name by id.
    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    /// Resolve an entry's genre ids into filterable identifiers.
    ///
    /// Known ids map to their name; ids absent from the index pass through
    /// as their decimal form instead of being dropped. The filter stage only
    /// needs membership testing, so an unresolved id is still matchable.
    pub fn filter_keys(&self, entry: &PodcastEntry) -> Vec<String> {
        entry
            .genres
            .iter()
            .map(|id| match self.name_of(*id) {
                Some(name) => name.to_string(),
                None => id.to_string(),
            })
            .collect()
    }
}

impl Default for GenreIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_genres(genres: Vec<u32>) -> PodcastEntry {
        PodcastEntry {
            id: "1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            seasons: 1,
            image: String::new(),
            updated: "2024-01-01T00:00:00Z".to_string(),
            genres,
        }
    }

    #[test]
    fn test_builtin_index_has_nine_genres() {
        let index = GenreIndex::builtin();
        assert_eq!(index.genres().len(), 9);
        assert_eq!(index.name_of(4), Some("Comedy"));
        assert_eq!(index.name_of(9), Some("Kids and Family"));
    }

    #[test]
    fn test_name_of_unknown_id() {
        let index = GenreIndex::builtin();
        assert_eq!(index.name_of(42), None);
    }

    #[test]
    fn test_filter_keys_resolves_known_ids() {
        let index = GenreIndex::builtin();
        let entry = entry_with_genres(vec![3, 6]);
        assert_eq!(index.filter_keys(&entry), vec!["History", "Business"]);
    }

    #[test]
    fn test_filter_keys_passes_unknown_ids_through() {
        let index = GenreIndex::builtin();
        let entry = entry_with_genres(vec![3, 42]);
        assert_eq!(index.filter_keys(&entry), vec!["History", "42"]);
    }

    #[test]
    fn test_filter_keys_empty_genre_list() {
        let index = GenreIndex::builtin();
        let entry = entry_with_genres(vec![]);
        assert!(index.filter_keys(&entry).is_empty());
    }

    #[test]
    fn test_index_serialization_round_trip() {
        let index = GenreIndex::builtin();
        let json = serde_json::to_string(&index).unwrap();
        let parsed: GenreIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, index);
    }
}
