//! Forces endpoints: `/api/forces/*`.

use axum::{Router, routing::post};

use super::{ApiError, Envelope, Payload};
use crate::formulas::forces;

pub fn router() -> Router {
    Router::new()
        .route("/normal", post(normal))
        .route("/friction", post(friction))
        .route("/tension", post(tension))
        .route("/applied", post(applied))
        .route("/gravitational", post(gravitational))
        .route("/electromagnetic", post(electromagnetic))
}

/// Normal force: N = m * g
async fn normal(payload: Payload) -> Result<Envelope, ApiError> {
    let mass = payload.require("mass")?;
    let result = forces::normal(mass);
    Ok(Envelope::new("N = mg", result).input("mass", mass))
}

/// Frictional force: F_f = μ * N
async fn friction(payload: Payload) -> Result<Envelope, ApiError> {
    let mu = payload.require("mu")?;
    let normal_force = payload.require("normal_force")?;
    let result = forces::friction(mu, normal_force);
    Ok(Envelope::new("F_f = μN", result)
        .input("mu", mu)
        .input("normal_force", normal_force))
}

/// Tension force: T = m * g
async fn tension(payload: Payload) -> Result<Envelope, ApiError> {
    let mass = payload.require("mass")?;
    let result = forces::tension(mass);
    Ok(Envelope::new("T = mg", result).input("mass", mass))
}

/// Applied force: F = F
async fn applied(payload: Payload) -> Result<Envelope, ApiError> {
    let force = payload.require("force")?;
    let result = forces::applied(force);
    Ok(Envelope::new("F = Applied force", result).input("force", force))
}

/// Gravitational force: F = G * m1 * m2 / r²
async fn gravitational(payload: Payload) -> Result<Envelope, ApiError> {
    let m1 = payload.require("m1")?;
    let m2 = payload.require("m2")?;
    let r = payload.require("r")?;
    let result = forces::gravitational(m1, m2, r)?;
    Ok(Envelope::new("F = G * (m1 * m2) / r^2", result)
        .input("m1", m1)
        .input("m2", m2)
        .input("r", r))
}

/// Electromagnetic force: F = k_e * q1 * q2 / r²
async fn electromagnetic(payload: Payload) -> Result<Envelope, ApiError> {
    let q1 = payload.require("q1")?;
    let q2 = payload.require("q2")?;
    let r = payload.require("r")?;
    let result = forces::electromagnetic(q1, q2, r)?;
    Ok(Envelope::new("F = k_e * (q1 * q2) / r^2", result)
        .input("q1", q1)
        .input("q2", q2)
        .input("r", r))
}
