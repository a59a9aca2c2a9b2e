// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use slug_field::application::ports::{time::Clock, util::SlugGenerator};
use slug_field::application::services::ApplicationServices;
use slug_field::domain::content::{ContentReadRepository, ContentWriteRepository};
use slug_field::domain::content_type::ContentTypeRepository;
use slug_field::domain::slug::UniquenessScope;
use slug_field::infrastructure::util::DefaultSlugGenerator;
use slug_field::presentation::http::state::HttpState;

use super::mocks::{DummyClock, InMemoryContentRepo, InMemoryContentTypeRepo};

/// サービスと、その背後にあるインメモリリポジトリへの参照
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub contents: Arc<InMemoryContentRepo>,
    pub content_types: Arc<InMemoryContentTypeRepo>,
}

pub fn build_services(scope: UniquenessScope) -> TestContext {
    let contents = Arc::new(InMemoryContentRepo::new());
    let content_types = Arc::new(InMemoryContentTypeRepo::new());

    let write_repo: Arc<dyn ContentWriteRepository> = contents.clone();
    let read_repo: Arc<dyn ContentReadRepository> = contents.clone();
    let type_repo: Arc<dyn ContentTypeRepository> = content_types.clone();
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        write_repo, read_repo, type_repo, clock, slugger, scope,
    ));

    TestContext {
        services,
        contents,
        content_types,
    }
}

pub fn build_test_state(ctx: &TestContext) -> HttpState {
    HttpState::new(
        Arc::clone(&ctx.services),
        &["http://localhost:3000".to_string()],
    )
}

pub fn make_test_router(ctx: &TestContext) -> axum::Router {
    slug_field::presentation::http::routes::build_router(build_test_state(ctx))
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
/// Returns the decoded body for further checks.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
