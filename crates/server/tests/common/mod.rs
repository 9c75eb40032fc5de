//! Common test utilities for in-process API testing.
//!
//! The fixture builds the real router with a mock printer, a pinned clock
//! and a temporary static root, so every request can be checked without a
//! printer attached.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use storage_ticket_core::testing::{FixedClock, MockPrinter};
use storage_ticket_core::{Config, StaticFilesConfig};
use storage_ticket_server::{create_router, AppState};

/// Index page placed in the fixture's static root.
pub const INDEX_HTML: &str = "<html><body><form action=\"/ticketApi/\" method=\"post\"></form></body></html>";

/// Test fixture for API testing with mock dependencies.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock printer - inspect prints, inject failures
    pub printer: Arc<MockPrinter>,
    /// Clock pinned to 2017-02-01 10:00 unless moved
    pub clock: Arc<FixedClock>,
    /// Static root holding `index.html`
    pub static_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub text: String,
}

impl TestResponse {
    /// Body parsed as JSON, or `Value::Null` when it is not JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

impl TestFixture {
    /// Create a new test fixture with the clock at 2017-02-01 10:00.
    pub async fn new() -> Self {
        let static_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");

        let printer = Arc::new(MockPrinter::new());
        let clock = Arc::new(FixedClock::at(2017, 2, 1, 10, 0));

        let config = Config {
            static_files: StaticFilesConfig {
                root: static_dir.path().to_path_buf(),
            },
            ..Config::default()
        };

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&printer) as Arc<dyn storage_ticket_core::Printer>,
            Arc::clone(&clock) as Arc<dyn storage_ticket_core::Clock>,
        ));

        Self {
            router: create_router(state),
            printer,
            clock,
            static_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a urlencoded form body.
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        self.post_with_content_type(path, body, "application/x-www-form-urlencoded")
            .await
    }

    /// POST a body with a custom content type.
    pub async fn post_with_content_type(
        &self,
        path: &str,
        body: &str,
        content_type: &str,
    ) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST raw bytes without a content type.
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            content_type,
            text: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
