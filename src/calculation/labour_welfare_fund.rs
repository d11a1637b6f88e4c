//! Labour Welfare Fund calculation.
//!
//! LWF is a small fixed contribution deducted once per cycle. The template
//! stores its monthly equivalent.

use rust_decimal::Decimal;

use crate::config::ZeroFallback;
use crate::models::{
    ComponentContext, ComponentTarget, ComponentType, LabourWelfareFund, PaymentTemplateComponent,
};

use super::fallback::resolve_zero;

/// Returns the monthly equivalent of the LWF employee contribution.
///
/// # Arguments
///
/// * `lwf` - The labour welfare fund scheme
///
/// # Returns
///
/// The contribution divided by the months in its deduction cycle. Unknown
/// cycles and missing contributions yield zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::lwf_monthly_value;
/// use payroll_engine::models::{DeductionCycle, LabourWelfareFund};
/// use rust_decimal::Decimal;
///
/// let lwf = LabourWelfareFund {
///     id: "lwf_001".to_string(),
///     employee_contribution: Some(Decimal::from(1200)),
///     deduction_cycle: DeductionCycle::Yearly,
/// };
/// assert_eq!(lwf_monthly_value(&lwf), Decimal::from(100));
/// ```
pub fn lwf_monthly_value(lwf: &LabourWelfareFund) -> Decimal {
    match (lwf.deduction_cycle.months(), lwf.employee_contribution) {
        (Some(months), Some(contribution)) => contribution / Decimal::from(months),
        _ => Decimal::ZERO,
    }
}

/// Builds the LWF template component.
///
/// Returns `None` when `field` is `None`. A computed zero is resolved
/// according to `policy`.
pub fn lwf_component(
    field: Option<&LabourWelfareFund>,
    context: &ComponentContext<'_>,
    policy: ZeroFallback,
) -> Option<PaymentTemplateComponent> {
    let lwf = field?;

    Some(context.component(
        ComponentTarget::Lwf {
            lwf_id: lwf.id.clone(),
        },
        ComponentType::StatutoryContribution,
        resolve_zero(lwf_monthly_value(lwf), context, policy),
    ))
}
