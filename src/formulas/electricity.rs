//! Ohm's law and electrical power formulas.

use super::{FormulaError, FormulaResult};

/// Current: I = V / R
pub fn current(voltage: f64, resistance: f64) -> FormulaResult {
    if resistance == 0.0 {
        return Err(FormulaError::ZeroDenominator("Resistance"));
    }
    Ok(voltage / resistance)
}

/// Voltage: V = I * R
pub fn voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// Resistance: R = V / I
pub fn resistance(voltage: f64, current: f64) -> FormulaResult {
    if current == 0.0 {
        return Err(FormulaError::ZeroDenominator("Current"));
    }
    Ok(voltage / current)
}

/// Power from whichever two of {V, I, R} are supplied:
/// P = V * I, P = I² * R, or P = V² / R, tried in that order.
///
/// When all three are supplied the V * I form wins; the inputs are not
/// checked for mutual consistency.
pub fn power(voltage: Option<f64>, current: Option<f64>, resistance: Option<f64>) -> FormulaResult {
    match (voltage, current, resistance) {
        (Some(v), Some(i), _) => Ok(v * i),
        (None, Some(i), Some(r)) => Ok(i * i * r),
        (Some(v), None, Some(r)) => {
            if r == 0.0 {
                return Err(FormulaError::ZeroDenominator("Resistance"));
            }
            Ok(v * v / r)
        }
        _ => Err(FormulaError::NotEnoughValues),
    }
}
