// tests/e2e_error_statuses.rs
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

mod support;

const LENGTH_MESSAGE: &str =
    "The field Input must be a string with a minimum length of 2 and a maximum length of 512.";

/// A body one byte over the limit is rejected before anything else happens
#[tokio::test]
async fn e2e_body_over_limit_returns_400() {
    let store = Arc::new(support::RecordingStore::default());
    let app = support::make_test_router(store.clone());

    let resp = support::post_kebab(app, vec![b'x'; support::BODY_LIMIT + 1]).await;

    support::assert_bad_request_message(resp, "Request body over the limit").await;
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn e2e_huge_body_returns_400() {
    let app = support::make_test_router(Arc::new(support::RecordingStore::default()));

    let resp = support::post_kebab(app, vec![b' '; 4 * 1024 * 1024]).await;

    support::assert_bad_request_message(resp, "Request body over the limit").await;
}

#[tokio::test]
async fn e2e_empty_or_malformed_input_returns_400() {
    for body in [
        r#"{"input":""}"#,
        r#"{"input":"   "}"#,
        r#"{"input":null}"#,
        r#"{}"#,
        r#"{"input":"x y""#,
        "not json",
        "",
        "[]",
    ] {
        let store = Arc::new(support::RecordingStore::default());
        let app = support::make_test_router(store.clone());

        let resp = support::post_kebab(app, body).await;

        support::assert_bad_request_message(resp, "Invalid JSON or empty input").await;
        assert!(store.calls().is_empty(), "stored for body {body:?}");
    }
}

#[tokio::test]
async fn e2e_input_length_out_of_range_returns_validation_messages() {
    let too_long = serde_json::json!({ "input": "x".repeat(513) }).to_string();

    for body in [r#"{"input":"x"}"#.to_string(), too_long] {
        let store = Arc::new(support::RecordingStore::default());
        let app = support::make_test_router(store.clone());

        let resp = support::post_kebab(app, body).await;
        let (status, content_type, bytes) = support::read_response(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("application/json"));
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([LENGTH_MESSAGE]));
        assert!(store.calls().is_empty());
    }
}

/// Characters outside the BMP count as two toward the length bounds
#[tokio::test]
async fn e2e_input_length_counts_utf16_units() {
    let store = Arc::new(support::RecordingStore::default());
    let app = support::make_test_router(store.clone());

    let resp = support::post_kebab(app, r#"{"input":"😀"}"#).await;
    let (status, _, bytes) = support::read_response(resp).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "Input": "😀", "Result": "" }));
    assert_eq!(store.calls(), vec![("😀".to_string(), String::new())]);

    // 257 emoji are 514 units and 1028 bytes, so widen the body limit
    let store = Arc::new(support::RecordingStore::default());
    let app = support::make_test_router_with_limit(store.clone(), 4096);
    let body = serde_json::json!({ "input": "😀".repeat(257) }).to_string();

    let resp = support::post_kebab(app, body).await;
    let (status, _, bytes) = support::read_response(resp).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!([LENGTH_MESSAGE]));
    assert!(store.calls().is_empty());
}

/// Storage failures are not caught: the caller sees an empty 500
#[tokio::test]
async fn e2e_storage_failure_returns_500_with_empty_body() {
    let app = support::make_test_router(Arc::new(support::FailingStore));

    let resp = support::post_kebab(app, r#"{"input":"x y"}"#).await;
    let (status, _, bytes) = support::read_response(resp).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn e2e_kebab_rejects_other_methods() {
    let app = support::make_test_router(Arc::new(support::RecordingStore::default()));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/kebab")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
