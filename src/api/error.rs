//! Request-level error taxonomy and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::formulas::FormulaError;

/// Errors surfaced to API callers.
///
/// All variants render as `{"error": "<message>"}`; the variant decides the
/// status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was absent or null. Reports the first such field in
    /// the route's declared order.
    #[error("Missing required fields: {0}")]
    MissingField(String),

    /// A supplied field could not be coerced to a number, or the body was
    /// not a JSON object.
    #[error("Invalid input")]
    InvalidInput,

    /// The formula itself was undefined for the supplied values.
    #[error(transparent)]
    Formula(#[from] FormulaError),

    /// A failure that should not occur under normal operation.
    #[error("An unexpected error occurred")]
    Internal,
}

impl ApiError {
    /// Create a missing-field error naming the given field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidInput | Self::Formula(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!("Request failed: {}", message);
        } else {
            warn!("Rejected request: {}", message);
        }

        let body = Json(serde_json::json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::missing_field("voltage").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Formula(FormulaError::NotEnoughValues).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_keep_original_wording() {
        assert_eq!(
            ApiError::missing_field("voltage").to_string(),
            "Missing required fields: voltage"
        );
        assert_eq!(
            ApiError::Formula(FormulaError::ZeroDenominator("Resistance")).to_string(),
            "Resistance cannot be zero"
        );
        assert_eq!(
            ApiError::Formula(FormulaError::NotEnoughValues).to_string(),
            "Not enough values to compute power"
        );
    }
}
