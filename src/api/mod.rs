//! HTTP API layer: validation, the response envelope, and one handler
//! module per physics domain.
//!
//! Every endpoint follows the same shape: extract the required fields from
//! the untyped JSON body in declared order, coerce each to f64, evaluate the
//! formula, and package the result as `{formula, inputs, result}`. Failures
//! short-circuit into an [`ApiError`] rendered as `{"error": message}`.

mod error;
mod payload;
mod response;

pub mod electricity;
pub mod forces;
pub mod kinematics;
pub mod projectile;
pub mod work_energy;

pub use error::ApiError;
pub use payload::Payload;
pub use response::Envelope;

use axum::Router;

/// Compose the per-domain routers under their `/api/{domain}` prefixes.
pub fn router() -> Router {
    Router::new()
        .nest("/api/kinematics", kinematics::router())
        .nest("/api/projectile", projectile::router())
        .nest("/api/work_energy", work_energy::router())
        .nest("/api/electricity", electricity::router())
        .nest("/api/forces", forces::router())
}
