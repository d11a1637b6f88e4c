//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, StatutoryDefaults, ZeroFallback};

/// Name of the calculator configuration file inside a config directory.
pub const CALCULATOR_FILE: &str = "calculator.yaml";

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// └── calculator.yaml   # Statutory defaults and zero handling policy
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory").unwrap();
/// println!("EPF rate: {}", loader.defaults().epf_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if `calculator.yaml` is missing and
    /// `ConfigParseError` if it is not valid YAML for [`CalculatorConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let calculator_path = path.as_ref().join(CALCULATOR_FILE);
        let config = Self::load_yaml::<CalculatorConfig>(&calculator_path)?;

        debug!(
            path = %calculator_path.display(),
            zero_fallback = ?config.zero_fallback,
            "Loaded calculator configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader, returning the calculator configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }

    /// Returns the statutory defaults.
    pub fn defaults(&self) -> &StatutoryDefaults {
        &self.config.defaults
    }

    /// Returns the zero handling policy.
    pub fn zero_fallback(&self) -> ZeroFallback {
        self.config.zero_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/statutory"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("payroll-engine-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.defaults().epf_rate, dec("0.12"));
        assert_eq!(loader.defaults().epf_restrict_value, dec("15000"));
        assert_eq!(loader.defaults().esi_rate, dec("0.0075"));
        assert_eq!(loader.defaults().esi_max_limit, dec("21000"));
        assert_eq!(loader.zero_fallback(), ZeroFallback::Legacy);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join(CALCULATOR_FILE), "defaults: [unclosed").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("calculator.yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_strict_policy() {
        let dir = scratch_dir("strict");
        fs::write(dir.join(CALCULATOR_FILE), "zero_fallback: strict\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.zero_fallback(), ZeroFallback::Strict);
        assert_eq!(loader.defaults(), &StatutoryDefaults::default());
    }

    #[test]
    fn test_into_config_returns_loaded_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let expected = loader.config().clone();

        assert_eq!(loader.into_config(), expected);
    }

    #[test]
    fn test_default_loader_uses_builtin_constants() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &CalculatorConfig::default());
    }
}
