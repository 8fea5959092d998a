use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, podcasts};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Browse view
        .route("/podcasts", get(podcasts::browse))
        .route("/podcasts/{id}", get(podcasts::get_podcast))
        .route("/genres", get(podcasts::list_genres))
        // Catalog lifecycle
        .route("/catalog/status", get(podcasts::catalog_status))
        .route("/catalog/refresh", post(podcasts::refresh_catalog))
        .with_state(state);

    // The browse frontend is served separately; the API allows any origin.
    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
