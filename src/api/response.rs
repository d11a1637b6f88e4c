//! Response types for the Payroll Component Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error returned when a request carries no CTC at all.
    pub fn missing_ctc() -> Self {
        Self::with_details(
            "MISSING_FIELD",
            "missing field: monthly_ctc",
            "Provide monthly_ctc, or annual_ctc to have it divided over twelve months",
        )
    }

    /// Creates the error returned when the body is not sent as JSON.
    pub fn missing_content_type() -> Self {
        Self::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSlabTable { pt_id, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_SLAB_TABLE",
                    format!("Invalid slab table for professional tax '{}'", pt_id),
                    message,
                ))
            }
            EngineError::InvalidComponent { component, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_COMPONENT",
                    format!("Invalid component '{}': {}", component, message),
                    "The template contains an invalid component definition",
                ))
            }
            EngineError::CalculationError { message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ))
            }
        }
    }
}
