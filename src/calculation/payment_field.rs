//! Payment field component calculation.
//!
//! Fixed payment fields are pre-calculated on the template, either as a flat
//! monthly amount or as a percentage of the monthly CTC. Variable fields are
//! entered per payroll run and keep whatever value is already stored.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    CalculationType, ComponentContext, ComponentTarget, PaymentField, PaymentTemplateComponent,
};

use super::aggregate::overflow;
use super::fallback::or_stored;

/// Calculates the monthly value of a payment field.
///
/// # Arguments
///
/// * `field` - The payment field selected on the template
/// * `monthly_ctc` - The employee's monthly CTC
///
/// # Returns
///
/// `Ok(None)` for variable fields and for fields without an amount, or
/// `EngineError::CalculationError` if the percentage overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::payment_field_value;
/// use payroll_engine::models::{CalculationType, PaymentField, PaymentType};
/// use rust_decimal::Decimal;
///
/// let hra = PaymentField {
///     id: "pf_hra".to_string(),
///     name: "HRA".to_string(),
///     payment_type: PaymentType::Fixed,
///     calculation_type: CalculationType::PercentageOfCtc,
///     amount: Some(Decimal::from(10)),
///     consider_for_epf: false,
///     consider_for_esi: true,
///     is_active: true,
/// };
///
/// let value = payment_field_value(&hra, Decimal::from(10000)).unwrap();
/// assert_eq!(value, Some(Decimal::from(1000)));
/// ```
pub fn payment_field_value(field: &PaymentField, monthly_ctc: Decimal) -> EngineResult<Option<Decimal>> {
    if !field.is_fixed() {
        return Ok(None);
    }
    let Some(amount) = field.amount else {
        return Ok(None);
    };

    match field.calculation_type {
        CalculationType::Fixed => Ok(Some(amount)),
        CalculationType::PercentageOfCtc => monthly_ctc
            .checked_mul(amount)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .map(Some)
            .ok_or_else(|| overflow(&format!("payment field '{}'", field.id))),
    }
}

/// Builds the template component for a payment field.
///
/// Returns `Ok(None)` when `field` is `None`. When no value can be calculated
/// the stored value of the prioritized or existing component is kept. The
/// component type is carried over from those components and defaults to
/// [`ComponentType::Earning`](crate::models::ComponentType::Earning).
pub fn payment_field_component(
    field: Option<&PaymentField>,
    monthly_ctc: Decimal,
    context: &ComponentContext<'_>,
) -> EngineResult<Option<PaymentTemplateComponent>> {
    let Some(field) = field else {
        return Ok(None);
    };
    let calculated = payment_field_value(field, monthly_ctc)?;

    Ok(Some(context.component(
        ComponentTarget::PaymentField {
            payment_field_id: field.id.clone(),
        },
        context.component_type().unwrap_or_default(),
        or_stored(calculated, context),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{Amount, ComponentType, PaymentType, TargetType};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_field(
        payment_type: PaymentType,
        calculation_type: CalculationType,
        amount: Option<&str>,
    ) -> PaymentField {
        PaymentField {
            id: "pf_001".to_string(),
            name: "Basic".to_string(),
            payment_type,
            calculation_type,
            amount: amount.map(dec),
            consider_for_epf: true,
            consider_for_esi: true,
            is_active: true,
        }
    }

    fn stored(value: &str, component_type: ComponentType) -> PaymentTemplateComponent {
        PaymentTemplateComponent {
            id: Some("comp_001".to_string()),
            template_id: Some("tpl_001".to_string()),
            target: ComponentTarget::PaymentField {
                payment_field_id: "pf_001".to_string(),
            },
            component_type,
            calculation_value: Some(Amount::new(dec(value))),
        }
    }

    #[test]
    fn test_missing_field_returns_none() {
        let result = payment_field_component(None, dec("10000"), &ComponentContext::empty()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fixed_amount() {
        let field = create_field(PaymentType::Fixed, CalculationType::Fixed, Some("500"));
        let component =
            payment_field_component(Some(&field), dec("10000"), &ComponentContext::empty())
                .unwrap()
                .unwrap();

        assert_eq!(component.calculation_value.unwrap().to_string(), "500.00");
        assert_eq!(component.target_type(), TargetType::PaymentField);
        assert_eq!(component.target.target_id(), "pf_001");
        assert_eq!(component.component_type, ComponentType::Earning);
    }

    #[test]
    fn test_percentage_of_ctc() {
        let field = create_field(PaymentType::Fixed, CalculationType::PercentageOfCtc, Some("10"));
        let component =
            payment_field_component(Some(&field), dec("10000"), &ComponentContext::empty())
                .unwrap()
                .unwrap();

        assert_eq!(component.calculation_value.unwrap().to_string(), "1000.00");
    }

    #[test]
    fn test_percentage_of_ctc_rounds_to_two_places() {
        let field = create_field(PaymentType::Fixed, CalculationType::PercentageOfCtc, Some("33.333"));
        let component =
            payment_field_component(Some(&field), dec("1000"), &ComponentContext::empty())
                .unwrap()
                .unwrap();

        assert_eq!(component.calculation_value.unwrap().to_string(), "333.33");
    }

    #[test]
    fn test_variable_field_keeps_stored_value() {
        let field = create_field(PaymentType::Variable, CalculationType::Fixed, Some("500"));
        let existing = stored("750", ComponentType::Earning);
        let context = ComponentContext::new(None, Some(&existing));

        let component = payment_field_component(Some(&field), dec("10000"), &context)
            .unwrap()
            .unwrap();

        assert_eq!(component.calculation_value.unwrap().to_string(), "750.00");
        assert_eq!(component.id.as_deref(), Some("comp_001"));
        assert_eq!(component.template_id.as_deref(), Some("tpl_001"));
    }

    #[test]
    fn test_variable_field_without_stored_value_has_no_value() {
        let field = create_field(PaymentType::Variable, CalculationType::Fixed, Some("500"));
        let component =
            payment_field_component(Some(&field), dec("10000"), &ComponentContext::empty())
                .unwrap()
                .unwrap();

        assert_eq!(component.calculation_value, None);
    }

    #[test]
    fn test_fixed_field_overrides_stored_value() {
        let field = create_field(PaymentType::Fixed, CalculationType::Fixed, Some("500"));
        let existing = stored("750", ComponentType::Earning);
        let context = ComponentContext::new(None, Some(&existing));

        let component = payment_field_component(Some(&field), dec("10000"), &context)
            .unwrap()
            .unwrap();
        assert_eq!(component.calculation_value.unwrap().to_string(), "500.00");
    }

    #[test]
    fn test_component_type_carried_over() {
        let field = create_field(PaymentType::Fixed, CalculationType::Fixed, Some("500"));
        let existing = stored("500", ComponentType::StatutoryContribution);
        let context = ComponentContext::new(Some(&existing), None);

        let component = payment_field_component(Some(&field), dec("10000"), &context)
            .unwrap()
            .unwrap();
        assert_eq!(component.component_type, ComponentType::StatutoryContribution);
    }

    #[test]
    fn test_missing_amount_has_no_value() {
        let field = create_field(PaymentType::Fixed, CalculationType::Fixed, None);
        assert_eq!(payment_field_value(&field, dec("10000")).unwrap(), None);
    }

    #[test]
    fn test_percentage_overflow_is_calculation_error() {
        let field = create_field(PaymentType::Fixed, CalculationType::PercentageOfCtc, Some("50"));

        match payment_field_value(&field, Decimal::MAX) {
            Err(EngineError::CalculationError { message }) => assert!(message.contains("pf_001")),
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
