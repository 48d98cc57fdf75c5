//! Request payload extraction and numeric field coercion.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use super::error::ApiError;

/// The untyped JSON object body shared by every formula endpoint.
///
/// Handlers pull fields out with [`Payload::require`] in the route's declared
/// field order, which yields the first-failure validation behavior: the first
/// absent field is named in the error, and coercion failures surface as an
/// invalid-input error.
#[derive(Debug, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Extract a required field as f64.
    ///
    /// Absent or null fields fail with a missing-field error naming the
    /// field; present but non-numeric values fail with an invalid-input
    /// error.
    pub fn require(&self, field: &str) -> Result<f64, ApiError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Err(ApiError::missing_field(field)),
            Some(value) => coerce(value).ok_or(ApiError::InvalidInput),
        }
    }

    /// Extract an optional field as f64.
    ///
    /// Absent fields yield `None`; present but non-numeric values (including
    /// an explicit null) fail with an invalid-input error.
    pub fn optional(&self, field: &str) -> Result<Option<f64>, ApiError> {
        match self.0.get(field) {
            None => Ok(None),
            Some(value) => coerce(value).map(Some).ok_or(ApiError::InvalidInput),
        }
    }
}

/// Coerce a raw JSON value to f64: numbers directly, strings by parsing.
fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Map body rejections (malformed JSON, non-object) onto the uniform
        // invalid-input error so every 4xx carries the same body shape.
        let Json(map) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidInput)?;
        Ok(Self(map))
    }
}
