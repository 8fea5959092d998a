//! Types for the catalog load state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::PodcastEntry;

/// Lifecycle of the in-memory catalog snapshot.
///
/// The machine starts at `Idle`, moves to `Loading` when a fetch begins,
/// and lands on `Ready` or `Failed`. A later reload moves `Ready` or
/// `Failed` back through `Loading`; the previous snapshot is replaced
/// only when the new fetch succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No fetch attempted yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// A snapshot is available.
    Ready {
        catalog: Vec<PodcastEntry>,
        fetched_at: DateTime<Utc>,
    },
    /// The most recent fetch failed and no usable snapshot exists.
    Failed {
        error: String,
        failed_at: DateTime<Utc>,
    },
}

impl LoadState {
    /// Short phase name, matching the wire form of [`LoadPhase`].
    pub fn phase(&self) -> LoadPhase {
        match self {
            LoadState::Idle => LoadPhase::Idle,
            LoadState::Loading => LoadPhase::Loading,
            LoadState::Ready { .. } => LoadPhase::Ready,
            LoadState::Failed { .. } => LoadPhase::Failed,
        }
    }
}

/// Discriminant of [`LoadState`], used in status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Serializable summary of the load state, without the catalog payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStatus {
    pub phase: LoadPhase,
    /// Entry count of the current snapshot, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,
    /// When the current snapshot was fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    /// When the most recent fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<DateTime<Utc>>,
    /// Error message from the most recent failed fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&LoadState> for LoadStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Idle | LoadState::Loading => Self {
                phase: state.phase(),
                entries: None,
                fetched_at: None,
                failed_at: None,
                error: None,
            },
            LoadState::Ready {
                catalog,
                fetched_at,
            } => Self {
                phase: LoadPhase::Ready,
                entries: Some(catalog.len()),
                fetched_at: Some(*fetched_at),
                failed_at: None,
                error: None,
            },
            LoadState::Failed { error, failed_at } => Self {
                phase: LoadPhase::Failed,
                entries: None,
                fetched_at: None,
                failed_at: Some(*failed_at),
                error: Some(error.clone()),
            },
        }
    }
}
