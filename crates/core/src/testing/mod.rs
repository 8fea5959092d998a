//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides a mock implementation of the catalog source trait,
//! allowing comprehensive E2E testing without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use podscout_core::testing::{MockCatalogSource, fixtures};
//!
//! let source = MockCatalogSource::new();
//!
//! // Configure mock responses
//! source.set_entries(vec![fixtures::entry("1", "The Daily", "2024-01-01T00:00:00Z", vec![8])]).await;
//!
//! // Use in AppState...
//! ```

mod mock_catalog;

pub use mock_catalog::MockCatalogSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::PodcastEntry;

    /// Create a test catalog entry with reasonable defaults.
    pub fn entry(id: &str, title: &str, updated: &str, genres: Vec<u32>) -> PodcastEntry {
        PodcastEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("A show about {}.", title.to_lowercase()),
            seasons: 2,
            image: format!("https://example.com/covers/{}.jpg", id),
            updated: updated.to_string(),
            genres,
        }
    }

    /// A ten-entry catalog spanning several genres and update times.
    pub fn catalog() -> Vec<PodcastEntry> {
        vec![
            entry("1", "The Daily", "2024-03-01T00:00:00Z", vec![8]),
            entry("2", "Hardcore History", "2023-01-01T00:00:00Z", vec![3]),
            entry("3", "Planet Money", "2024-02-01T00:00:00Z", vec![6]),
            entry("4", "Radiolab", "2024-01-15T00:00:00Z", vec![5]),
            entry("5", "Serial", "2022-06-01T00:00:00Z", vec![2]),
            entry("6", "The Daily Laugh", "2024-04-01T00:00:00Z", vec![4]),
            entry("7", "Money Talks", "2021-01-01T00:00:00Z", vec![6]),
            entry("8", "Dark Histories", "2023-08-01T00:00:00Z", vec![3]),
            entry("9", "Laugh Track", "2024-05-01T00:00:00Z", vec![4]),
            entry("10", "Baking Bread", "2023-03-01T00:00:00Z", vec![5]),
        ]
    }
}
