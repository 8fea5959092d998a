//! Mock catalog source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog::{CatalogFetchError, CatalogSource, PodcastEntry};

/// Mock implementation of the CatalogSource trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable entry list
/// - Count fetches for assertions
/// - Simulate failures and slow responses
///
/// # Example
///
/// ```rust,ignore
/// use podscout_core::testing::{MockCatalogSource, fixtures};
///
/// let source = MockCatalogSource::new();
/// source.set_entries(fixtures::catalog()).await;
///
/// let entries = source.fetch_catalog().await?;
/// assert_eq!(entries.len(), 10);
/// ```
#[derive(Debug)]
pub struct MockCatalogSource {
    /// Entries returned by successful fetches.
    entries: Arc<RwLock<Vec<PodcastEntry>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<CatalogFetchError>>>,
    /// Artificial latency applied to every fetch.
    fetch_delay: Arc<RwLock<Option<Duration>>>,
    /// Number of fetches performed.
    fetch_calls: Arc<RwLock<usize>>,
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogSource {
    /// Create a new empty mock catalog source.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            fetch_delay: Arc::new(RwLock::new(None)),
            fetch_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Create a mock that serves the given entries.
    pub fn with_entries(entries: Vec<PodcastEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
            ..Self::new()
        }
    }

    /// Replace the served entries.
    pub async fn set_entries(&self, entries: Vec<PodcastEntry>) {
        *self.entries.write().await = entries;
    }

    /// Make the next fetch fail with the given error.
    pub async fn set_next_error(&self, error: CatalogFetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay every fetch by the given duration.
    pub async fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.write().await = Some(delay);
    }

    /// Number of fetches performed so far.
    pub async fn fetch_calls(&self) -> usize {
        *self.fetch_calls.read().await
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<PodcastEntry>, CatalogFetchError> {
        if let Some(delay) = *self.fetch_delay.read().await {
            tokio::time::sleep(delay).await;
        }

        *self.fetch_calls.write().await += 1;

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.entries.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_mock_serves_configured_entries() {
        let source = MockCatalogSource::new();
        source.set_entries(fixtures::catalog()).await;

        let entries = source.fetch_catalog().await.unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(source.fetch_calls().await, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let source = MockCatalogSource::new();
        source
            .set_next_error(CatalogFetchError::ParseError("bad".to_string()))
            .await;

        assert!(source.fetch_catalog().await.is_err());
        assert!(source.fetch_catalog().await.is_ok());
        assert_eq!(source.fetch_calls().await, 2);
    }
}
