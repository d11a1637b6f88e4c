//! Statutory bonus calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    ComponentContext, ComponentTarget, ComponentType, PaymentTemplateComponent, StatutoryBonus,
};

use super::aggregate::overflow;
use super::fallback::or_stored;

/// Returns the bonus payable on `value`.
///
/// # Arguments
///
/// * `bonus` - The statutory bonus scheme
/// * `value` - The bonus base, normally the uncapped EPF-eligible wages
///
/// # Returns
///
/// `Ok(None)` when the scheme sets no percentage or a zero percentage.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::bonus_value;
/// use payroll_engine::models::StatutoryBonus;
/// use rust_decimal::Decimal;
///
/// let bonus = StatutoryBonus {
///     id: "bonus_001".to_string(),
///     percentage: Some(Decimal::new(833, 2)),
/// };
/// assert_eq!(bonus_value(&bonus, Decimal::from(10000)).unwrap(), Some(Decimal::from(833)));
/// ```
pub fn bonus_value(bonus: &StatutoryBonus, value: Decimal) -> EngineResult<Option<Decimal>> {
    let Some(percentage) = bonus.percentage.filter(|p| !p.is_zero()) else {
        return Ok(None);
    };

    percentage
        .checked_mul(value)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .map(Some)
        .ok_or_else(|| overflow(&format!("statutory bonus '{}'", bonus.id)))
}

/// Builds the statutory bonus template component.
///
/// Returns `Ok(None)` when `field` is `None`. Without a percentage the stored
/// value is kept.
pub fn bonus_component(
    field: Option<&StatutoryBonus>,
    value: Decimal,
    context: &ComponentContext<'_>,
) -> EngineResult<Option<PaymentTemplateComponent>> {
    let Some(bonus) = field else {
        return Ok(None);
    };
    let calculated = bonus_value(bonus, value)?;

    Ok(Some(context.component(
        ComponentTarget::Bonus {
            bonus_id: bonus.id.clone(),
        },
        ComponentType::StatutoryContribution,
        or_stored(calculated, context),
    )))
}
