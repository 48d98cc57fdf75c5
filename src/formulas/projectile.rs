//! Projectile motion formulas.
//!
//! Launch angles are taken in degrees and converted to radians internally.

use super::constants::STANDARD_GRAVITY;

/// Horizontal range: R = u² * sin(2θ) / g
pub fn range(u: f64, angle_deg: f64) -> f64 {
    let angle = angle_deg.to_radians();
    u * u * (2.0 * angle).sin() / STANDARD_GRAVITY
}

/// Time of flight: T = 2 * u * sin(θ) / g
pub fn time_of_flight(u: f64, angle_deg: f64) -> f64 {
    let angle = angle_deg.to_radians();
    2.0 * u * angle.sin() / STANDARD_GRAVITY
}

/// Maximum height: H = u² * sin²(θ) / (2g)
pub fn max_height(u: f64, angle_deg: f64) -> f64 {
    let angle = angle_deg.to_radians();
    u * u * angle.sin().powi(2) / (2.0 * STANDARD_GRAVITY)
}
