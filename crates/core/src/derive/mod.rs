//! Browse derivation pipeline.
//!
//! Turns the raw catalog snapshot plus a set of browse criteria into the
//! page of entries a client should see. The pipeline is pure: filter by
//! search text and genre, sort, then paginate. No stage mutates the
//! catalog and no stage can fail; bad criteria simply yield an empty page.

mod filter;
mod paginate;
mod sort;

pub use filter::filter_entries;
pub use paginate::paginate;
pub use sort::sort_entries;

use serde::{Deserialize, Serialize};

use crate::catalog::PodcastEntry;
use crate::genre::GenreIndex;

/// Sort order for the browse view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Catalog order, untouched.
    #[default]
    None,
    /// Title ascending, case-insensitive.
    Az,
    /// Title descending, case-insensitive.
    Za,
    /// Most recently updated first.
    Newest,
}

/// Browse criteria as supplied by a client.
///
/// Every field has a neutral default, so an empty query means "first page
/// of the whole catalog in source order".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Case-insensitive title substring. Empty means no constraint.
    #[serde(default)]
    pub search: String,
    /// Genre filter key (name, or decimal id for unindexed genres).
    /// Empty means no constraint.
    #[serde(default)]
    pub genre: String,
    /// Sort order.
    #[serde(default)]
    pub sort: SortMode,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: String::new(),
            sort: SortMode::default(),
            page: 1,
        }
    }
}

/// One derived page of the browse view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedPage {
    /// Entries visible on the requested page, in display order.
    pub items: Vec<PodcastEntry>,
    /// Total pages for the current filter and sort. Zero when nothing
    /// matches.
    pub total_pages: usize,
}

/// Run the full filter, sort, paginate pipeline over a catalog snapshot.
pub fn derive(
    catalog: &[PodcastEntry],
    criteria: &Criteria,
    index: &GenreIndex,
    page_size: usize,
) -> DerivedPage {
    let filtered = filter_entries(catalog, &criteria.search, &criteria.genre, index);
    let sorted = sort_entries(filtered, criteria.sort);
    let (page, total_pages) = paginate(&sorted, page_size, criteria.page);

    DerivedPage {
        items: page.iter().map(|entry| (*entry).clone()).collect(),
        total_pages,
    }
}
