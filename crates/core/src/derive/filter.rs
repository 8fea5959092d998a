//! Filter stage of the derivation pipeline.

use crate::catalog::PodcastEntry;
use crate::genre::GenreIndex;

/// Filter the catalog by search text and genre.
///
/// An entry is included iff the lowercased title contains the lowercased
/// search text (empty search matches everything) and the selected genre is
/// one of the entry's filter keys (empty genre matches everything). The
/// empty string is the "no constraint" sentinel for both controls; it is
/// never a valid genre name or a meaningful substring query.
///
/// Input order is preserved. This stage never fails; an unmatched query
/// yields an empty result.
pub fn filter_entries<'a>(
    catalog: &'a [PodcastEntry],
    search: &str,
    genre: &str,
    index: &GenreIndex,
) -> Vec<&'a PodcastEntry> {
    let search_lower = search.to_lowercase();

    catalog
        .iter()
        .filter(|entry| {
            let matches_search =
                search.is_empty() || entry.title.to_lowercase().contains(&search_lower);
            let matches_genre = genre.is_empty()
                || index.filter_keys(entry).iter().any(|key| key == genre);
            matches_search && matches_genre
        })
        .collect()
}
