//! Integration tests for the projectile motion routes.

mod common;

use axum::http::StatusCode;
use common::{assert_approx, error_of, post_json, result_of};
use serde_json::json;

#[tokio::test]
async fn test_range() {
    let (status, body) = post_json("/api/projectile/range", json!({"u": 10, "angle": 45})).await;
    assert_eq!(status, StatusCode::OK);
    assert_approx(result_of(&body), 10.204, 0.01);
    assert_eq!(body["formula"], "R = (u^2 * sin(2θ)) / g");
}

#[tokio::test]
async fn test_range_missing_angle() {
    let (status, body) = post_json("/api/projectile/range", json!({"u": 10})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Missing required fields: angle"));
}

#[tokio::test]
async fn test_range_invalid_input() {
    let (status, body) = post_json(
        "/api/projectile/range",
        json!({"u": "invalid", "angle": 45}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Invalid input"));
}

#[tokio::test]
async fn test_time_of_flight() {
    let (status, body) = post_json("/api/projectile/time", json!({"u": 10, "angle": 30})).await;
    assert_eq!(status, StatusCode::OK);
    assert_approx(result_of(&body), 1.020, 0.01);
}

#[tokio::test]
async fn test_time_of_flight_invalid_angle() {
    let (status, body) = post_json("/api/projectile/time", json!({"u": 10, "angle": "fast"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Invalid input"));
}

#[tokio::test]
async fn test_max_height() {
    let (status, body) = post_json("/api/projectile/height", json!({"u": 10, "angle": 90})).await;
    assert_eq!(status, StatusCode::OK);
    assert_approx(result_of(&body), 5.102, 0.01);
}

#[tokio::test]
async fn test_max_height_missing_speed() {
    let (status, body) = post_json("/api/projectile/height", json!({"angle": 90})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Missing required fields: u"));
}
