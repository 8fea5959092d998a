//! Catalog loading service.
//!
//! Owns the load state machine and the in-memory catalog snapshot. One
//! loader instance is shared across the process; all reads of the catalog
//! go through it.

mod types;

pub use types::*;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::catalog::{CatalogSource, PodcastEntry};

/// Shared catalog loader.
///
/// `load` is single-flight: while a fetch is in flight, further `load`
/// calls return without starting another fetch. Reads never block on a
/// fetch; they observe whichever state the machine is currently in.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    state: RwLock<LoadState>,
}

impl CatalogLoader {
    /// Create a loader in the `Idle` state.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Fetch the catalog and advance the state machine.
    ///
    /// Returns `true` if this call performed a fetch, `false` if a fetch
    /// was already in flight and the call was ignored. The state is
    /// `Loading` for the duration of the fetch and ends at `Ready` or
    /// `Failed`.
    pub async fn load(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if matches!(*state, LoadState::Loading) {
                debug!("Catalog load already in flight, ignoring");
                return false;
            }
            *state = LoadState::Loading;
        }

        info!("Loading catalog");

        match self.source.fetch_catalog().await {
            Ok(catalog) => {
                info!("Catalog loaded: {} entries", catalog.len());
                let mut state = self.state.write().await;
                *state = LoadState::Ready {
                    catalog,
                    fetched_at: Utc::now(),
                };
                true
            }
            Err(e) => {
                error!("Catalog load failed: {}", e);
                let mut state = self.state.write().await;
                *state = LoadState::Failed {
                    error: e.to_string(),
                    failed_at: Utc::now(),
                };
                true
            }
        }
    }

    /// Current state, cloned.
    pub async fn state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Serializable status summary.
    pub async fn status(&self) -> LoadStatus {
        LoadStatus::from(&*self.state.read().await)
    }

    /// The current snapshot, or `None` unless the state is `Ready`.
    pub async fn snapshot(&self) -> Option<Vec<PodcastEntry>> {
        match &*self.state.read().await {
            LoadState::Ready { catalog, .. } => Some(catalog.clone()),
            _ => None,
        }
    }

    /// Look up a single entry in the ready snapshot.
    ///
    /// Returns `None` when no snapshot exists or the id is not present.
    pub async fn entry_by_id(&self, id: &str) -> Option<PodcastEntry> {
        match &*self.state.read().await {
            LoadState::Ready { catalog, .. } => catalog.iter().find(|e| e.id == id).cloned(),
            _ => None,
        }
    }
}
