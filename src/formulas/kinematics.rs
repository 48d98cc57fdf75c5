//! Kinematics formulas for uniformly accelerated motion.

use super::{FormulaError, FormulaResult};

/// Final velocity: v = u + a * t
pub fn velocity(u: f64, a: f64, t: f64) -> f64 {
    u + a * t
}

/// Displacement: s = u * t + 0.5 * a * t²
pub fn displacement(u: f64, a: f64, t: f64) -> f64 {
    u * t + 0.5 * a * t * t
}

/// Final velocity squared: v² = u² + 2 * a * s, rounded to 2 decimal places.
pub fn velocity_squared(u: f64, a: f64, s: f64) -> f64 {
    round2(u * u + 2.0 * a * s)
}

/// Time: t = (v - u) / a
pub fn time(v: f64, u: f64, a: f64) -> FormulaResult {
    if a == 0.0 {
        return Err(FormulaError::ZeroDenominator("Acceleration"));
    }
    Ok((v - u) / a)
}

/// Acceleration: a = (v - u) / t
pub fn acceleration(v: f64, u: f64, t: f64) -> FormulaResult {
    if t == 0.0 {
        return Err(FormulaError::ZeroDenominator("Time"));
    }
    Ok((v - u) / t)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
