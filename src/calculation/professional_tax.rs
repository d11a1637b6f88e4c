//! Professional tax calculation.
//!
//! Professional tax is a slab lookup on gross salary. Slab tables are stored
//! as serialized JSON; the first slab whose inclusive range contains the
//! gross value wins.

use rust_decimal::Decimal;

use crate::config::ZeroFallback;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ComponentContext, ComponentTarget, ComponentType, PaymentTemplateComponent, ProfessionalTax,
    PtSlab,
};

use super::fallback::resolve_zero;

/// Parses the slab table of a professional tax scheme.
///
/// A missing or blank table yields no slabs. Malformed JSON is an
/// [`EngineError::InvalidSlabTable`].
pub fn parse_slabs(pt: &ProfessionalTax) -> EngineResult<Vec<PtSlab>> {
    match pt.gross_salary_range.as_deref().map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|e| EngineError::InvalidSlabTable {
            pt_id: pt.id.clone(),
            message: e.to_string(),
        }),
    }
}

/// Looks up the professional tax payable on `value`.
///
/// Returns `Ok(None)` when the scheme defines no slabs and `Ok(Some(0))` when
/// no slab matches.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::professional_tax_value;
/// use payroll_engine::models::ProfessionalTax;
/// use rust_decimal::Decimal;
///
/// let pt = ProfessionalTax {
///     id: "pt_001".to_string(),
///     gross_salary_range: Some(
///         r#"[{"start":0,"end":10000,"value":0},{"start":10001,"end":20000,"value":150}]"#
///             .to_string(),
///     ),
/// };
///
/// let tax = professional_tax_value(&pt, Decimal::from(15000)).unwrap();
/// assert_eq!(tax, Some(Decimal::from(150)));
/// ```
pub fn professional_tax_value(pt: &ProfessionalTax, value: Decimal) -> EngineResult<Option<Decimal>> {
    let slabs = parse_slabs(pt)?;
    if slabs.is_empty() {
        return Ok(None);
    }

    Ok(Some(
        slabs
            .iter()
            .find(|slab| slab.contains(value))
            .map(|slab| slab.value)
            .unwrap_or(Decimal::ZERO),
    ))
}

/// Builds the professional tax template component.
///
/// # Arguments
///
/// * `field` - The template's professional tax scheme, if any
/// * `value` - Gross salary for the month
/// * `context` - Stored components carrying identity and the fallback value
/// * `policy` - How a computed zero is resolved
///
/// # Returns
///
/// `Ok(None)` when `field` is `None` or defines no slabs, otherwise the
/// component. Fails with [`EngineError::InvalidSlabTable`] on malformed JSON.
pub fn professional_tax_component(
    field: Option<&ProfessionalTax>,
    value: Decimal,
    context: &ComponentContext<'_>,
    policy: ZeroFallback,
) -> EngineResult<Option<PaymentTemplateComponent>> {
    let Some(pt) = field else {
        return Ok(None);
    };
    let Some(tax) = professional_tax_value(pt, value)? else {
        return Ok(None);
    };

    Ok(Some(context.component(
        ComponentTarget::Pt {
            pt_id: pt.id.clone(),
        },
        ComponentType::StatutoryContribution,
        resolve_zero(tax, context, policy),
    )))
}
