//! Physical constants used across the formula modules.

/// Standard gravitational acceleration at the Earth's surface, m/s².
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Newtonian gravitational constant G, N·m²/kg².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Coulomb's constant k_e, N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.9875e9;
