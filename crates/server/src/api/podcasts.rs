//! Browse API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use podscout_core::{Criteria, Genre, LoadPhase, LoadState, LoadStatus, PodcastEntry};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub items: Vec<PodcastEntry>,
    pub total_pages: usize,
    pub page: u32,
    /// Load phase behind the view, so clients can tell an empty page
    /// during a load apart from a filter that matched nothing.
    pub phase: LoadPhase,
}

#[derive(Debug, Serialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Whether this request performed a fetch. False when one was
    /// already in flight.
    pub started: bool,
    pub status: LoadStatus,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/podcasts
///
/// Browse the catalog: filter, sort, paginate.
///
/// Before the first load completes the view is an empty page, not an
/// error. A failed load surfaces as 503 until a refresh succeeds.
pub async fn browse(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<Criteria>,
) -> Result<Json<BrowseResponse>, impl IntoResponse> {
    match state.loader().state().await {
        LoadState::Ready { catalog, .. } => {
            let derived = podscout_core::derive(
                &catalog,
                &criteria,
                state.genre_index(),
                state.page_size(),
            );
            Ok(Json(BrowseResponse {
                items: derived.items,
                total_pages: derived.total_pages,
                page: criteria.page,
                phase: LoadPhase::Ready,
            }))
        }
        pending @ (LoadState::Idle | LoadState::Loading) => Ok(Json(BrowseResponse {
            items: Vec::new(),
            total_pages: 0,
            page: criteria.page,
            phase: pending.phase(),
        })),
        LoadState::Failed { error, .. } => {
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(ErrorResponse { error })))
        }
    }
}

/// GET /api/v1/podcasts/{id}
///
/// Get a single catalog entry by id.
pub async fn get_podcast(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PodcastEntry>, impl IntoResponse> {
    if state.loader().state().await.phase() != LoadPhase::Ready {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Catalog not available".to_string(),
            }),
        ));
    }

    match state.loader().entry_by_id(&id).await {
        Some(entry) => Ok(Json(entry)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Podcast not found: {}", id),
            }),
        )),
    }
}

/// GET /api/v1/genres
///
/// List the genre index.
pub async fn list_genres(State(state): State<Arc<AppState>>) -> Json<GenreListResponse> {
    Json(GenreListResponse {
        genres: state.genre_index().genres().to_vec(),
    })
}

/// GET /api/v1/catalog/status
///
/// Current load state summary.
pub async fn catalog_status(State(state): State<Arc<AppState>>) -> Json<LoadStatus> {
    Json(state.loader().status().await)
}

/// POST /api/v1/catalog/refresh
///
/// Re-fetch the catalog. A refresh while one is in flight is ignored.
pub async fn refresh_catalog(State(state): State<Arc<AppState>>) -> Json<RefreshResponse> {
    let started = state.loader().load().await;
    let status = state.loader().status().await;
    Json(RefreshResponse { started, status })
}
