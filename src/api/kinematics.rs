//! Kinematics endpoints: `/api/kinematics/*`.

use axum::{Router, routing::post};

use super::{ApiError, Envelope, Payload};
use crate::formulas::kinematics;

pub fn router() -> Router {
    Router::new()
        .route("/velocity", post(velocity))
        .route("/displacement", post(displacement))
        .route("/velocity_squared", post(velocity_squared))
        .route("/time", post(time))
        .route("/acceleration", post(acceleration))
}

/// Final velocity: v = u + a * t
async fn velocity(payload: Payload) -> Result<Envelope, ApiError> {
    let u = payload.require("u")?;
    let a = payload.require("a")?;
    let t = payload.require("t")?;
    let result = kinematics::velocity(u, a, t);
    Ok(Envelope::new("v = u + a * t", result)
        .input("u", u)
        .input("a", a)
        .input("t", t))
}

/// Displacement: s = u * t + 0.5 * a * t²
async fn displacement(payload: Payload) -> Result<Envelope, ApiError> {
    let u = payload.require("u")?;
    let a = payload.require("a")?;
    let t = payload.require("t")?;
    let result = kinematics::displacement(u, a, t);
    Ok(Envelope::new("s = u * t + 0.5 * a * t^2", result)
        .input("u", u)
        .input("a", a)
        .input("t", t))
}

/// Final velocity squared: v² = u² + 2 * a * s.
///
/// Also reports the derived root `v` whenever v² is non-negative.
async fn velocity_squared(payload: Payload) -> Result<Envelope, ApiError> {
    let u = payload.require("u")?;
    let a = payload.require("a")?;
    let s = payload.require("s")?;
    let result = kinematics::velocity_squared(u, a, s);
    let mut envelope = Envelope::new("v^2 = u^2 + 2 * a * s", result)
        .input("u", u)
        .input("a", a)
        .input("s", s);
    if result >= 0.0 {
        envelope = envelope.field("velocity", result.sqrt());
    }
    Ok(envelope)
}

/// Time: t = (v - u) / a
async fn time(payload: Payload) -> Result<Envelope, ApiError> {
    let v = payload.require("v")?;
    let u = payload.require("u")?;
    let a = payload.require("a")?;
    let result = kinematics::time(v, u, a)?;
    Ok(Envelope::new("t = (v - u) / a", result)
        .input("v", v)
        .input("u", u)
        .input("a", a))
}

/// Acceleration: a = (v - u) / t
async fn acceleration(payload: Payload) -> Result<Envelope, ApiError> {
    let v = payload.require("v")?;
    let u = payload.require("u")?;
    let t = payload.require("t")?;
    let result = kinematics::acceleration(v, u, t)?;
    Ok(Envelope::new("a = (v - u) / t", result)
        .input("v", v)
        .input("u", u)
        .input("t", t))
}
