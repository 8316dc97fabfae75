//! Shared test harness for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use livres::application::service::CatalogService;
use livres::domain::model::book::BookFields;
use livres::domain::model::catalog::Catalog;
use livres::domain::model::id::BookId;
use livres::domain::repository::CatalogRepository;
use livres::interface::server::{self, AppState};

// =============================================================================
// InMemoryRepo — seed source without file I/O
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// Seed repository holding entries in memory. `None` simulates a missing seed.
pub struct InMemoryRepo {
    entries: Option<Vec<BookFields>>,
}

impl InMemoryRepo {
    pub fn empty() -> Self {
        Self { entries: None }
    }

    pub fn with_entries(entries: Vec<BookFields>) -> Self {
        Self {
            entries: Some(entries),
        }
    }
}

impl CatalogRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Catalog>, Self::Error> {
        match &self.entries {
            Some(entries) => Catalog::from_seed(entries.iter().cloned())
                .map(Some)
                .map_err(|_| InMemoryError),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Standard two-book seed:
/// ```text
/// 1: Roman / A1 / P1
/// 2: Conte / A2 / P2
/// ```
pub fn standard_entries() -> Vec<BookFields> {
    vec![
        BookFields::new("Roman", "A1", "P1"),
        BookFields::new("Conte", "A2", "P2"),
    ]
}

pub fn standard_service() -> CatalogService {
    CatalogService::open(&InMemoryRepo::with_entries(standard_entries())).unwrap()
}

pub fn id(raw: i64) -> BookId {
    BookId::new(raw).unwrap()
}

/// Router over the standard seed. Returns the service too so tests can
/// inspect the catalog after a request.
pub fn test_app() -> (Router, CatalogService) {
    let catalog = standard_service();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();

    // Leak the TempDir so the static files outlive the test body.
    let dir = Box::leak(Box::new(dir));
    let app = server::build_app(AppState::new(catalog.clone()), dir.path());
    (app, catalog)
}

// =============================================================================
// HTTP helpers
// =============================================================================

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn expect_status(app: Router, request: Request<Body>, status: StatusCode) -> Response<Body> {
    let response = send(app, request).await;
    assert_eq!(response.status(), status);
    response
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// Asserts the result is an error whose message contains `expected`.
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
