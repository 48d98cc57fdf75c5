//! Work, power, and mechanical energy formulas.

use super::constants::STANDARD_GRAVITY;
use super::{FormulaError, FormulaResult};

/// Work: W = F * d
pub fn work(force: f64, distance: f64) -> f64 {
    force * distance
}

/// Power: P = W / t
pub fn power(work: f64, time: f64) -> FormulaResult {
    if time == 0.0 {
        return Err(FormulaError::ZeroDenominator("Time"));
    }
    Ok(work / time)
}

/// Kinetic energy: KE = 1/2 * m * v²
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity * velocity
}

/// Potential energy: PE = m * g * h
pub fn potential_energy(mass: f64, height: f64) -> f64 {
    mass * STANDARD_GRAVITY * height
}
