//! Electricity endpoints: `/api/electricity/*`.

use axum::{Router, routing::post};

use super::{ApiError, Envelope, Payload};
use crate::formulas::electricity;

pub fn router() -> Router {
    Router::new()
        .route("/current", post(current))
        .route("/voltage", post(voltage))
        .route("/resistance", post(resistance))
        .route("/power", post(power))
}

/// Current: I = V / R
async fn current(payload: Payload) -> Result<Envelope, ApiError> {
    let voltage = payload.require("voltage")?;
    let resistance = payload.require("resistance")?;
    let result = electricity::current(voltage, resistance)?;
    Ok(Envelope::new("I = V / R", result)
        .input("voltage", voltage)
        .input("resistance", resistance))
}

/// Voltage: V = I * R
async fn voltage(payload: Payload) -> Result<Envelope, ApiError> {
    let current = payload.require("current")?;
    let resistance = payload.require("resistance")?;
    let result = electricity::voltage(current, resistance);
    Ok(Envelope::new("V = I * R", result)
        .input("current", current)
        .input("resistance", resistance))
}

/// Resistance: R = V / I
async fn resistance(payload: Payload) -> Result<Envelope, ApiError> {
    let voltage = payload.require("voltage")?;
    let current = payload.require("current")?;
    let result = electricity::resistance(voltage, current)?;
    Ok(Envelope::new("R = V / I", result)
        .input("voltage", voltage)
        .input("current", current))
}

/// Power from whichever two of {V, I, R} are supplied.
///
/// Unlike the other routes, all three fields are optional here; the formula
/// layer decides whether enough of them were given. Unsupplied inputs are
/// echoed back as null.
async fn power(payload: Payload) -> Result<Envelope, ApiError> {
    let voltage = payload.optional("voltage")?;
    let current = payload.optional("current")?;
    let resistance = payload.optional("resistance")?;
    let result = electricity::power(voltage, current, resistance)?;
    Ok(Envelope::new("P = V * I OR P = I^2 * R OR P = V^2 / R", result)
        .input("voltage", voltage)
        .input("current", current)
        .input("resistance", resistance))
}
