//! Sort stage of the derivation pipeline.

use chrono::{DateTime, Utc};

use crate::catalog::PodcastEntry;

use super::SortMode;

/// Order the filtered entries according to the selected mode.
///
/// All comparisons are stable, so entries that compare equal keep their
/// relative catalog order. Title comparisons are case-insensitive. For
/// `Newest`, entries whose `updated` field does not parse sort as the
/// earliest possible instant and therefore land at the end.
pub fn sort_entries<'a>(
    mut entries: Vec<&'a PodcastEntry>,
    mode: SortMode,
) -> Vec<&'a PodcastEntry> {
    match mode {
        SortMode::None => {}
        SortMode::Az => {
            entries.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortMode::Za => {
            entries.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
        SortMode::Newest => {
            entries.sort_by(|a, b| sort_instant(b).cmp(&sort_instant(a)));
        }
    }
    entries
}

fn sort_instant(entry: &PodcastEntry) -> DateTime<Utc> {
    entry.updated_instant().unwrap_or(DateTime::<Utc>::MIN_UTC)
}
