//! Employee Provident Fund calculation.
//!
//! The EPF wage base is the sum of EPF-eligible earnings, capped at the
//! scheme's restrict value when the scheme restricts employee contribution.
//! The contribution itself is a flat fraction of that base.

use rust_decimal::Decimal;

use crate::config::StatutoryDefaults;
use crate::error::EngineResult;
use crate::models::{ComponentContext, ComponentTarget, ComponentType, EpfScheme, PaymentTemplateComponent};

use super::aggregate::{WageValues, gross_value, overflow};
use super::fallback::or_stored;

/// Returns the EPF wage base for the given values.
///
/// # Arguments
///
/// * `epf` - The template's EPF scheme, if any
/// * `values` - EPF-eligible wage values
/// * `defaults` - Statutory defaults supplying the cap when the scheme has none
///
/// # Returns
///
/// The sum of `values`, or the cap (`employee_restrict_value`, default 15000)
/// when `epf` restricts employee contribution and the sum meets or exceeds it.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{WageValues, value_for_epf};
/// use payroll_engine::config::StatutoryDefaults;
/// use payroll_engine::models::EpfScheme;
/// use rust_decimal::Decimal;
///
/// let epf = EpfScheme {
///     id: "epf_001".to_string(),
///     employee_contribution: None,
///     restrict_employee_contribution: true,
///     employee_restrict_value: Some(Decimal::from(15000)),
/// };
/// let values = WageValues::from([("basic".to_string(), Decimal::from(20000))]);
///
/// let base = value_for_epf(Some(&epf), &values, &StatutoryDefaults::default()).unwrap();
/// assert_eq!(base, Decimal::from(15000));
/// ```
pub fn value_for_epf(
    epf: Option<&EpfScheme>,
    values: &WageValues,
    defaults: &StatutoryDefaults,
) -> EngineResult<Decimal> {
    let total = gross_value(values)?;

    Ok(match epf {
        Some(scheme) if scheme.restrict_employee_contribution => {
            let cap = scheme
                .employee_restrict_value
                .unwrap_or(defaults.epf_restrict_value);
            if total >= cap { cap } else { total }
        }
        _ => total,
    })
}

/// Returns the employee EPF contribution on `value`.
pub fn epf_contribution(
    epf: &EpfScheme,
    value: Decimal,
    defaults: &StatutoryDefaults,
) -> EngineResult<Decimal> {
    value
        .checked_mul(epf.employee_contribution.unwrap_or(defaults.epf_rate))
        .ok_or_else(|| overflow(&format!("EPF contribution for '{}'", epf.id)))
}

/// Builds the EPF template component.
///
/// No cap is applied here; pass the base returned by [`value_for_epf`].
pub fn epf_component(
    field: Option<&EpfScheme>,
    value: Decimal,
    context: &ComponentContext<'_>,
    defaults: &StatutoryDefaults,
) -> EngineResult<Option<PaymentTemplateComponent>> {
    let Some(epf) = field else {
        return Ok(None);
    };
    let contribution = epf_contribution(epf, value, defaults)?;

    Ok(Some(context.component(
        ComponentTarget::Epf {
            epf_id: epf.id.clone(),
        },
        ComponentType::StatutoryContribution,
        or_stored(Some(contribution), context),
    )))
}
