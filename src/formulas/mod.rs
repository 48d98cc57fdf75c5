//! Pure physics formula functions.
//!
//! Every function in this module is a deterministic function of its numeric
//! parameters with no side effects and no knowledge of HTTP. Formulas that
//! are undefined for some inputs return [`FormulaError`] instead of a silent
//! non-finite value.

pub mod constants;
pub mod electricity;
pub mod forces;
pub mod kinematics;
pub mod projectile;
pub mod work_energy;

use thiserror::Error;

/// Result type for fallible formula evaluations.
pub type FormulaResult = Result<f64, FormulaError>;

/// Domain errors arising from the formulas themselves, distinct from
/// input-validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// A denominator quantity was zero where the formula is undefined.
    #[error("{0} cannot be zero")]
    ZeroDenominator(&'static str),

    /// Fewer variables were supplied than the formula needs.
    #[error("Not enough values to compute power")]
    NotEnoughValues,
}
