//! Contact and non-contact force formulas.

use super::constants::{COULOMB_CONSTANT, GRAVITATIONAL_CONSTANT, STANDARD_GRAVITY};
use super::{FormulaError, FormulaResult};

/// Normal force: N = m * g
pub fn normal(mass: f64) -> f64 {
    mass * STANDARD_GRAVITY
}

/// Frictional force: F_f = μ * N
pub fn friction(mu: f64, normal_force: f64) -> f64 {
    mu * normal_force
}

/// Tension force for a hanging mass: T = m * g
pub fn tension(mass: f64) -> f64 {
    mass * STANDARD_GRAVITY
}

/// Applied force, usually given directly in the problem: F = F
pub fn applied(force: f64) -> f64 {
    force
}

/// Gravitational force: F = G * m1 * m2 / r²
pub fn gravitational(m1: f64, m2: f64, r: f64) -> FormulaResult {
    if r == 0.0 {
        return Err(FormulaError::ZeroDenominator("Distance"));
    }
    Ok(GRAVITATIONAL_CONSTANT * m1 * m2 / (r * r))
}

/// Electromagnetic force: F = k_e * q1 * q2 / r²
pub fn electromagnetic(q1: f64, q2: f64, r: f64) -> FormulaResult {
    if r == 0.0 {
        return Err(FormulaError::ZeroDenominator("Distance"));
    }
    Ok(COULOMB_CONSTANT * q1 * q2 / (r * r))
}
