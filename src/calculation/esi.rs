//! Employee State Insurance calculation.
//!
//! ESI is waived entirely once ESI wages cross the wage ceiling; there is no
//! partial contribution above the ceiling.

use rust_decimal::Decimal;

use crate::config::StatutoryDefaults;
use crate::error::EngineResult;
use crate::models::{ComponentContext, ComponentTarget, ComponentType, EsiScheme, PaymentTemplateComponent};

use super::aggregate::{WageValues, gross_value, overflow};
use super::fallback::or_stored;

/// Returns the ESI wage base for the given values.
///
/// Returns zero when the sum exceeds `max_limit` (default 21000). A sum equal
/// to the limit is still covered.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{WageValues, value_for_esi};
/// use payroll_engine::config::StatutoryDefaults;
/// use payroll_engine::models::EsiScheme;
/// use rust_decimal::Decimal;
///
/// let esi = EsiScheme {
///     id: "esi_001".to_string(),
///     employees_contribution: None,
///     max_limit: Some(Decimal::from(21000)),
/// };
/// let values = WageValues::from([
///     ("basic".to_string(), Decimal::from(15000)),
///     ("hra".to_string(), Decimal::from(7000)),
/// ]);
///
/// let base = value_for_esi(Some(&esi), &values, &StatutoryDefaults::default()).unwrap();
/// assert_eq!(base, Decimal::ZERO);
/// ```
pub fn value_for_esi(
    esi: Option<&EsiScheme>,
    values: &WageValues,
    defaults: &StatutoryDefaults,
) -> EngineResult<Decimal> {
    let total = gross_value(values)?;
    let max_limit = esi
        .and_then(|scheme| scheme.max_limit)
        .unwrap_or(defaults.esi_max_limit);

    Ok(if total > max_limit { Decimal::ZERO } else { total })
}

/// Returns the employee ESI contribution on `value`.
pub fn esi_contribution(
    esi: &EsiScheme,
    value: Decimal,
    defaults: &StatutoryDefaults,
) -> EngineResult<Decimal> {
    value
        .checked_mul(esi.employees_contribution.unwrap_or(defaults.esi_rate))
        .ok_or_else(|| overflow(&format!("ESI contribution for '{}'", esi.id)))
}

/// Builds the ESI template component.
///
/// No ceiling check happens here; pass the base returned by [`value_for_esi`].
pub fn esi_component(
    field: Option<&EsiScheme>,
    value: Decimal,
    context: &ComponentContext<'_>,
    defaults: &StatutoryDefaults,
) -> EngineResult<Option<PaymentTemplateComponent>> {
    let Some(esi) = field else {
        return Ok(None);
    };
    let contribution = esi_contribution(esi, value, defaults)?;

    Ok(Some(context.component(
        ComponentTarget::Esi {
            esi_id: esi.id.clone(),
        },
        ComponentType::StatutoryContribution,
        or_stored(Some(contribution), context),
    )))
}
