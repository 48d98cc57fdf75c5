//! The uniform success envelope: `{formula, inputs, result}`.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Response packager for successful computations.
///
/// Built fresh per request; the `inputs` object echoes the coerced values the
/// formula actually used. The occasional endpoint tacks on an extra derived
/// field (see the velocity_squared route), serialized at the top level.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    formula: &'static str,
    inputs: Map<String, Value>,
    result: f64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Envelope {
    /// Create an envelope for the given formula string and result.
    pub fn new(formula: &'static str, result: f64) -> Self {
        Self {
            formula,
            inputs: Map::new(),
            result,
            extra: Map::new(),
        }
    }

    /// Echo a coerced input value.
    pub fn input(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.to_string(), value.into());
        self
    }

    /// Attach an extra top-level field derived from the result.
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
