//! Podcast catalog source abstraction.
//!
//! This module defines the contract for fetching the full podcast catalog
//! from a remote source, plus the HTTP implementation used in production.
//! The entire catalog is fetched in one call; no filtering, sorting, or
//! pagination is pushed down to the source.

mod http;
mod types;

pub use http::{HttpCatalogSource, HttpSourceConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Source responded with a non-success status.
    #[error("Source error: {status} - {message}")]
    SourceError { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Source not configured (missing base URL, etc.).
    #[error("Source not configured: {0}")]
    NotConfigured(String),
}

/// Trait for podcast catalog sources.
///
/// Implemented by `HttpCatalogSource` in production and by
/// `testing::MockCatalogSource` in tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the complete catalog in a single call.
    async fn fetch_catalog(&self) -> Result<Vec<PodcastEntry>, CatalogFetchError>;
}
