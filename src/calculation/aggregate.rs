//! Wage aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Named wage values contributing to a statutory base (field id → value).
pub type WageValues = BTreeMap<String, Decimal>;

/// Builds the error returned when decimal arithmetic on `what` overflows.
pub(crate) fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("decimal overflow while calculating {}", what),
    }
}

/// Sums all values with no scheme-specific behaviour.
///
/// # Arguments
///
/// * `values` - Wage values keyed by payment field id
///
/// # Returns
///
/// The sum, or `EngineError::CalculationError` if it overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{WageValues, gross_value};
/// use rust_decimal::Decimal;
///
/// let mut values = WageValues::new();
/// values.insert("basic".to_string(), Decimal::from(15000));
/// values.insert("hra".to_string(), Decimal::from(7000));
///
/// assert_eq!(gross_value(&values).unwrap(), Decimal::from(22000));
/// ```
pub fn gross_value(values: &WageValues) -> EngineResult<Decimal> {
    values.iter().try_fold(Decimal::ZERO, |total, (name, value)| {
        total
            .checked_add(*value)
            .ok_or_else(|| overflow(&format!("wage total at '{}'", name)))
    })
}
