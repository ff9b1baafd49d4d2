//! Common test utilities for in-process API testing with mocks.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinequery_core::testing::MockMovieCatalog;
use cinequery_core::{Config, LlmConfig, MovieCatalog, TmdbConfig, Translator};
use cinequery_server::api::create_router;
use cinequery_server::state::AppState;

/// Re-export fixtures for test convenience
pub use cinequery_core::testing::fixtures;

/// Which credentials the fixture pretends to have.
pub struct TestConfig {
    pub tmdb_configured: bool,
    pub llm_configured: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            tmdb_configured: true,
            llm_configured: true,
        }
    }
}

/// Test fixture for API testing with a mock catalog.
///
/// The translator chain is rule-only so tests never leave the process;
/// the config still claims an LLM credential so the per-request checks
/// pass.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure search/discover/person responses
    pub catalog: Arc<MockMovieCatalog>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture with both credentials configured.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom credential presence.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let catalog = Arc::new(MockMovieCatalog::new());

        let config = Config {
            llm: test_config.llm_configured.then(|| LlmConfig {
                api_key: Some("test-llm-key".to_string()),
                ..Default::default()
            }),
            tmdb: test_config.tmdb_configured.then(|| TmdbConfig {
                api_key: "test-tmdb-key".to_string(),
                base_url: None,
                image_base_url: None,
            }),
            ..Default::default()
        };

        let translator = Arc::new(Translator::new());
        let catalog_for_state = test_config
            .tmdb_configured
            .then(|| Arc::clone(&catalog) as Arc<dyn MovieCatalog>);

        let state = Arc::new(AppState::new(config, translator, catalog_for_state));
        let router = create_router(state);

        Self { router, catalog }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}
