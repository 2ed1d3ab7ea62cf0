// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use kebabify::application::ports::{storage::KebabStore, util::Normalizer};
use kebabify::application::services::ApplicationServices;
use kebabify::infrastructure::util::KebabNormalizer;
use kebabify::presentation::http::{routes::build_router, state::HttpState};
use tower::util::ServiceExt as _;

pub const BODY_LIMIT: usize = 1024;

pub fn build_test_state(
    normalizer: Arc<dyn Normalizer>,
    store: Arc<dyn KebabStore>,
) -> HttpState {
    build_test_state_with_limit(normalizer, store, BODY_LIMIT)
}

pub fn build_test_state_with_limit(
    normalizer: Arc<dyn Normalizer>,
    store: Arc<dyn KebabStore>,
    body_limit: usize,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(normalizer, store, body_limit));
    HttpState { services }
}

pub fn make_test_router(store: Arc<dyn KebabStore>) -> axum::Router {
    build_router(build_test_state(Arc::new(KebabNormalizer), store), &[])
}

pub fn make_test_router_with(
    normalizer: Arc<dyn Normalizer>,
    store: Arc<dyn KebabStore>,
) -> axum::Router {
    build_router(build_test_state(normalizer, store), &[])
}

/// Router with the real normalizer and a custom body limit.
pub fn make_test_router_with_limit(store: Arc<dyn KebabStore>, body_limit: usize) -> axum::Router {
    build_router(
        build_test_state_with_limit(Arc::new(KebabNormalizer), store, body_limit),
        &[],
    )
}

pub async fn post_kebab(app: axum::Router, body: impl Into<Body>) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/kebab")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Split a response into status, content type and the full body.
pub async fn read_response(resp: Response) -> (StatusCode, String, Bytes) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    (status, content_type, bytes)
}

/// Assert a 400 carrying a plain text message.
pub async fn assert_bad_request_message(resp: Response, expected: &str) {
    let (status, content_type, bytes) = read_response(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        content_type.starts_with("text/plain"),
        "unexpected content-type: {content_type}"
    );
    assert_eq!(String::from_utf8_lossy(&bytes), expected);
}
