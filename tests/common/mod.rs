#![allow(dead_code)]

//! Shared helpers for exercising the production router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

/// POST a JSON value to the given route and return (status, parsed body).
pub async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(uri, &body.to_string()).await
}

/// POST a raw body string to the given route and return (status, parsed body).
pub async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
    let app = physics_api_server::core::server::router();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Extract the numeric result from a success envelope.
pub fn result_of(body: &Value) -> f64 {
    body["result"].as_f64().expect("result field")
}

/// Extract the message from an error body.
pub fn error_of(body: &Value) -> &str {
    body["error"].as_str().expect("error field")
}

/// Assert two floats agree within an absolute tolerance.
pub fn assert_approx(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}
