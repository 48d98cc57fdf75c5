//! Work and energy endpoints: `/api/work_energy/*`.

use axum::{Router, routing::post};

use super::{ApiError, Envelope, Payload};
use crate::formulas::work_energy;

pub fn router() -> Router {
    Router::new()
        .route("/work", post(work))
        .route("/power", post(power))
        .route("/kinetic", post(kinetic))
        .route("/potential", post(potential))
}

/// Work: W = F * d
async fn work(payload: Payload) -> Result<Envelope, ApiError> {
    let force = payload.require("force")?;
    let distance = payload.require("distance")?;
    let result = work_energy::work(force, distance);
    Ok(Envelope::new("W = F * d", result)
        .input("force", force)
        .input("distance", distance))
}

/// Power: P = W / t
async fn power(payload: Payload) -> Result<Envelope, ApiError> {
    let work = payload.require("work")?;
    let time = payload.require("time")?;
    let result = work_energy::power(work, time)?;
    Ok(Envelope::new("P = W / t", result)
        .input("work", work)
        .input("time", time))
}

/// Kinetic energy: KE = 1/2 * m * v²
async fn kinetic(payload: Payload) -> Result<Envelope, ApiError> {
    let mass = payload.require("mass")?;
    let velocity = payload.require("velocity")?;
    let result = work_energy::kinetic_energy(mass, velocity);
    Ok(Envelope::new("KE = 1/2 * m * v^2", result)
        .input("mass", mass)
        .input("velocity", velocity))
}

/// Potential energy: PE = m * g * h
async fn potential(payload: Payload) -> Result<Envelope, ApiError> {
    let mass = payload.require("mass")?;
    let height = payload.require("height")?;
    let result = work_energy::potential_energy(mass, height);
    Ok(Envelope::new("PE = m * g * h", result)
        .input("mass", mass)
        .input("height", height))
}
