//! Configuration types for payroll component calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee EPF contribution used when a scheme leaves it unset (12%).
pub fn default_epf_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// EPF wage cap used when a restricted scheme leaves it unset.
pub fn default_epf_restrict_value() -> Decimal {
    Decimal::from(15000)
}

/// Employee ESI contribution used when a scheme leaves it unset (0.75%).
pub fn default_esi_rate() -> Decimal {
    Decimal::new(75, 4)
}

/// ESI wage ceiling used when a scheme leaves it unset.
pub fn default_esi_max_limit() -> Decimal {
    Decimal::from(21000)
}

/// Statutory rates and limits applied when a scheme does not define them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryDefaults {
    /// Employee EPF contribution as a fraction.
    #[serde(default = "default_epf_rate")]
    pub epf_rate: Decimal,
    /// EPF wage cap for restricted schemes.
    #[serde(default = "default_epf_restrict_value")]
    pub epf_restrict_value: Decimal,
    /// Employee ESI contribution as a fraction.
    #[serde(default = "default_esi_rate")]
    pub esi_rate: Decimal,
    /// ESI wage ceiling.
    #[serde(default = "default_esi_max_limit")]
    pub esi_max_limit: Decimal,
}

impl Default for StatutoryDefaults {
    fn default() -> Self {
        Self {
            epf_rate: default_epf_rate(),
            epf_restrict_value: default_epf_restrict_value(),
            esi_rate: default_esi_rate(),
            esi_max_limit: default_esi_max_limit(),
        }
    }
}

/// What a computed zero from professional tax or labour welfare fund means.
///
/// The payroll product this engine serves historically replaced a computed
/// zero with the previously stored value. `Legacy` keeps that behaviour;
/// `Strict` treats zero as a valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroFallback {
    /// A computed zero falls back to the stored value, or to no value.
    #[default]
    Legacy,
    /// A computed zero is kept as `0.00`.
    Strict,
}

/// The complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Statutory defaults.
    #[serde(default)]
    pub defaults: StatutoryDefaults,
    /// Zero handling for professional tax and labour welfare fund.
    #[serde(default)]
    pub zero_fallback: ZeroFallback,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_constants() {
        let defaults = StatutoryDefaults::default();
        assert_eq!(defaults.epf_rate, dec("0.12"));
        assert_eq!(defaults.epf_restrict_value, dec("15000"));
        assert_eq!(defaults.esi_rate, dec("0.0075"));
        assert_eq!(defaults.esi_max_limit, dec("21000"));
    }

    #[test]
    fn test_default_zero_fallback_is_legacy() {
        assert_eq!(CalculatorConfig::default().zero_fallback, ZeroFallback::Legacy);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "defaults:\n  esi_max_limit: \"25000\"\nzero_fallback: strict\n";
        let config: CalculatorConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.defaults.esi_max_limit, dec("25000"));
        assert_eq!(config.defaults.epf_rate, dec("0.12"));
        assert_eq!(config.zero_fallback, ZeroFallback::Strict);
    }
}
