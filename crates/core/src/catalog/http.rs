//! HTTP catalog source.
//!
//! Fetches the full podcast catalog from a remote JSON endpoint. The source
//! contract is a single GET returning an array of show previews; there is no
//! server-side search or pagination to lean on.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::PodcastEntry;
use super::{CatalogFetchError, CatalogSource};
use async_trait::async_trait;

/// HTTP catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSourceConfig {
    /// Catalog endpoint URL (required).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// HTTP catalog source client.
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    /// Create a new HTTP catalog source.
    pub fn new(config: HttpSourceConfig) -> Result<Self, CatalogFetchError> {
        if config.base_url.is_empty() {
            return Err(CatalogFetchError::NotConfigured(
                "catalog base URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<PodcastEntry>, CatalogFetchError> {
        debug!("Fetching catalog from {}", self.base_url);

        let response = self.client.get(&self.base_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogFetchError::SourceError {
                status: status.as_u16(),
                message: body,
            });
        }

        let previews: Vec<ShowPreview> = response.json().await.map_err(|e| {
            CatalogFetchError::ParseError(format!("Failed to parse catalog response: {}", e))
        })?;

        let entries: Vec<PodcastEntry> = previews.into_iter().map(|p| p.into()).collect();

        debug!("Fetched catalog: {} entries", entries.len());

        Ok(entries)
    }
}

// ============================================================================
// Wire format (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ShowPreview {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    seasons: u32,
    #[serde(default)]
    image: String,
    updated: String,
    #[serde(default)]
    genres: Vec<u32>,
}

impl From<ShowPreview> for PodcastEntry {
    fn from(p: ShowPreview) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            seasons: p.seasons,
            image: p.image,
            updated: p.updated,
            genres: p.genres,
        }
    }
}
