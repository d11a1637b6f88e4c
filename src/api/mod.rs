//! HTTP API module for the Payroll Component Engine.
//!
//! This module provides the REST API endpoint for calculating the components
//! of a payment template.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{SchemesRequest, TemplateCalculationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
