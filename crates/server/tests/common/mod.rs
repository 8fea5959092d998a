//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock catalog source injected, enabling comprehensive E2E testing
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use podscout_core::{
    load_config_from_str, testing::MockCatalogSource, CatalogLoader, GenreIndex,
};

/// Re-export fixtures for test convenience
pub use podscout_core::testing::fixtures;

/// Test fixture for E2E testing with a mock catalog source.
///
/// Provides an in-process server where the catalog source is fully
/// controllable: entries, errors, and latency.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_browse() {
///     let fixture = TestFixture::new().await;
///     fixture.load_catalog().await;
///
///     let response = fixture.get("/api/v1/podcasts?sort=az").await;
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog source - configure entries and failures
    pub source: Arc<MockCatalogSource>,
    /// Shared loader, for driving the load lifecycle directly
    pub loader: Arc<CatalogLoader>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with a ten-entry mock catalog, not yet
    /// loaded.
    pub async fn new() -> Self {
        let config = load_config_from_str(
            r#"
[source]
base_url = "http://mock.invalid/shows"

[server]
host = "127.0.0.1"
port = 0
"#,
        )
        .expect("Failed to parse test config");

        let source = Arc::new(MockCatalogSource::new());
        source.set_entries(fixtures::catalog()).await;

        let loader = Arc::new(CatalogLoader::new(source.clone()));

        let state = Arc::new(podscout_server::state::AppState::new(
            config,
            loader.clone(),
            GenreIndex::builtin(),
        ));

        let router = podscout_server::api::create_router(state);

        Self {
            router,
            source,
            loader,
        }
    }

    /// Load the catalog through the shared loader.
    pub async fn load_catalog(&self) {
        self.loader.load().await;
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    /// Send a POST request with an empty body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
