//! Application state for the Payroll Component Engine API.

use std::sync::Arc;

use crate::config::{CalculatorConfig, ConfigLoader, ZeroFallback};

/// Shared application state.
///
/// Only the calculator configuration is needed per request, so the loader is
/// consumed and its configuration shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<CalculatorConfig>,
}

impl AppState {
    /// Creates the state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            calculator: Arc::new(loader.into_config()),
        }
    }

    /// Statutory defaults and zero handling used by `/calculate`.
    pub fn config(&self) -> &CalculatorConfig {
        &self.calculator
    }

    /// The zero handling policy in effect.
    pub fn zero_fallback(&self) -> ZeroFallback {
        self.calculator.zero_fallback
    }
}
