//! Integration tests for the work/energy routes.

mod common;

use axum::http::StatusCode;
use common::{error_of, post_json, result_of};
use serde_json::json;

#[tokio::test]
async fn test_work() {
    let (status, body) = post_json("/api/work_energy/work", json!({"force": 10, "distance": 5})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_of(&body), 50.0); // 10 * 5
}

#[tokio::test]
async fn test_work_with_zero_force() {
    let (status, body) = post_json("/api/work_energy/work", json!({"force": 0, "distance": 10})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_of(&body), 0.0);
}

#[tokio::test]
async fn test_power() {
    let (status, body) = post_json("/api/work_energy/power", json!({"work": 50, "time": 5})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_of(&body), 10.0); // 50 / 5
}

#[tokio::test]
async fn test_power_zero_time() {
    let (status, body) = post_json("/api/work_energy/power", json!({"work": 50, "time": 0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Time cannot be zero"));
}

#[tokio::test]
async fn test_power_missing_time() {
    let (status, body) = post_json("/api/work_energy/power", json!({"work": 50})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Missing required fields: time"));
}

#[tokio::test]
async fn test_kinetic() {
    let (status, body) = post_json(
        "/api/work_energy/kinetic",
        json!({"mass": 10, "velocity": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_of(&body), 125.0); // 1/2 * 10 * 5^2
}

#[tokio::test]
async fn test_potential() {
    let (status, body) = post_json(
        "/api/work_energy/potential",
        json!({"mass": 10, "height": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_of(&body), 490.0); // 10 * 9.8 * 5
}

#[tokio::test]
async fn test_potential_invalid_mass() {
    let (status, body) = post_json(
        "/api/work_energy/potential",
        json!({"mass": "invalid", "height": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).contains("Invalid input"));
}
