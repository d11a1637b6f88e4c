//! Configuration loading and management for the Payroll Component Engine.
//!
//! This module loads the statutory defaults (EPF/ESI rates and limits) and
//! the zero handling policy from YAML.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/statutory").unwrap();
//! println!("ESI ceiling: {}", config.defaults().esi_max_limit);
//! ```

mod loader;
mod types;

pub use loader::{CALCULATOR_FILE, ConfigLoader};
pub use types::{
    CalculatorConfig, StatutoryDefaults, ZeroFallback, default_epf_rate,
    default_epf_restrict_value, default_esi_max_limit, default_esi_rate,
};
