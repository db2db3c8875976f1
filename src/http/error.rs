//! Error envelope for the HTTP boundary.
//!
//! # Error Taxonomy
//! - Malformed request: body absent or not parseable → 400
//! - Missing required field: name/phone/address empty → 400, fields named
//! - Unexpected failure: anything else → 500, generic message
//!
//! Nothing is retried; nothing is fatal to the process.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::order::OrderValidationError;

/// Failures surfaced by the API, each mapped to a status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body absent or not parseable as JSON.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// One or more required order fields missing/empty.
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    /// Internal fault; details logged, not exposed.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

/// Uniform JSON error envelope: `{status:"error", message}`.
#[derive(Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let envelope = ErrorEnvelope {
            status: "error",
            message: self.to_string(),
        };
        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation(OrderValidationError {
            missing: vec!["phone"],
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required field(s): phone");
    }

    #[test]
    fn malformed_body_maps_to_400() {
        let err = ApiError::MalformedBody("expected value".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500_with_generic_message() {
        let err = ApiError::Internal;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
