//! Projectile motion endpoints: `/api/projectile/*`.
//!
//! All routes take the launch speed `u` and the launch `angle` in degrees.

use axum::{Router, routing::post};

use super::{ApiError, Envelope, Payload};
use crate::formulas::projectile;

pub fn router() -> Router {
    Router::new()
        .route("/range", post(range))
        .route("/time", post(time))
        .route("/height", post(height))
}

/// Horizontal range: R = u² * sin(2θ) / g
async fn range(payload: Payload) -> Result<Envelope, ApiError> {
    let u = payload.require("u")?;
    let angle = payload.require("angle")?;
    let result = projectile::range(u, angle);
    Ok(Envelope::new("R = (u^2 * sin(2θ)) / g", result)
        .input("u", u)
        .input("angle", angle))
}

/// Time of flight: T = 2 * u * sin(θ) / g
async fn time(payload: Payload) -> Result<Envelope, ApiError> {
    let u = payload.require("u")?;
    let angle = payload.require("angle")?;
    let result = projectile::time_of_flight(u, angle);
    Ok(Envelope::new("T = (2 * u * sinθ) / g", result)
        .input("u", u)
        .input("angle", angle))
}

/// Maximum height: H = u² * sin²(θ) / (2g)
async fn height(payload: Payload) -> Result<Envelope, ApiError> {
    let u = payload.require("u")?;
    let angle = payload.require("angle")?;
    let result = projectile::max_height(u, angle);
    Ok(Envelope::new("H = (u^2 * sin^2θ) / (2g)", result)
        .input("u", u)
        .input("angle", angle))
}
