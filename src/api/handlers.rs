//! HTTP request handlers for the Payroll Component Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{TemplateInput, calculate_template};

use super::request::TemplateCalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

fn error_response(error: ApiErrorResponse) -> Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a template calculation request and returns every calculated
/// component together with wage totals and the audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TemplateCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing template calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    let input = match TemplateInput::try_from(request) {
        Ok(input) => input,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.message,
                "Invalid calculation request"
            );
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    match calculate_template(&input, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                template_id = ?result.template_id,
                components = result.components.len(),
                gross = %result.totals.gross,
                statutory_total = %result.totals.statutory_total,
                duration_us = result.audit_trace.duration_us,
                zero_fallback = ?state.zero_fallback(),
                "Template calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Template calculation failed"
            );
            error_response(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    #[test]
    fn test_router_builds_with_default_config() {
        let _router = create_router(AppState::new(ConfigLoader::default()));
    }
}
