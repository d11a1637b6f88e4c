//! Error types for the Payroll Component Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating payment
//! template components.

use thiserror::Error;

/// The main error type for the Payroll Component Engine.
///
/// Missing fields and schemes are not errors: calculators signal them by
/// returning `None`. This type covers the failures that must reach the caller,
/// such as unreadable configuration or a malformed professional tax slab table.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calculator.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A professional tax slab table could not be parsed.
    #[error("Invalid slab table for professional tax '{pt_id}': {message}")]
    InvalidSlabTable {
        /// The ID of the professional tax scheme.
        pt_id: String,
        /// A description of the parse error.
        message: String,
    },

    /// A component definition was invalid or contained inconsistent data.
    #[error("Invalid component '{component}': {message}")]
    InvalidComponent {
        /// The component (field or scheme id) that was invalid.
        component: String,
        /// A description of what made the component invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
