/// HTTP testing utilities
use anyhow::Result;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use soundview::http::server::build_app_routes;
use soundview::http::state::HttpServerState;
use soundview::storage::RecordStore;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// HTTP test client for making requests to our app
pub struct TestApp {
    app: axum::Router,
}

impl TestApp {
    /// Create a new test app with the provided store.
    ///
    /// Uses the shared route builder from the main server, so tests hit
    /// the exact same routes as production.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let state = HttpServerState {
            name: Arc::new("Soundview Test".to_string()),
            store,
        };
        let app = build_app_routes(state);

        Self { app }
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> Result<TestResponse> {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())?;

        let response = self.app.clone().oneshot(request).await?;
        Ok(TestResponse::new(response).await)
    }
}

/// Test response wrapper for easier assertions
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    async fn new(response: axum::response::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default()
            .to_vec();
        let body = String::from_utf8_lossy(&body_bytes).to_string();

        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse response body as JSON
    pub fn json<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Header value as a string, if present
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {}, got {}. Body: {}",
            expected, self.status, self.body
        );
        self
    }
}
