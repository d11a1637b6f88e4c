//! Payment template calculation.
//!
//! Runs every component calculator for one payment template: payment fields
//! first, then the statutory schemes on the wage bases those fields produce.
//! Each rule application is recorded in the audit trace.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::{CalculatorConfig, ZeroFallback};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Amount, AuditStep, AuditTrace, AuditWarning, ComponentContext, ComponentTarget, ComponentType,
    EpfScheme, EsiScheme, LabourWelfareFund, PaymentField, PaymentTemplateComponent,
    ProfessionalTax, StatutoryBonus, TargetType, TemplateCalculation, TemplateTotals,
};

use super::aggregate::{WageValues, gross_value, overflow};
use super::bonus::{bonus_component, bonus_value};
use super::epf::{epf_component, value_for_epf};
use super::esi::{esi_component, value_for_esi};
use super::labour_welfare_fund::{lwf_component, lwf_monthly_value};
use super::payment_field::{payment_field_component, payment_field_value};
use super::professional_tax::{professional_tax_component, professional_tax_value};

/// Everything needed to calculate one payment template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateInput {
    /// The template being calculated, if already persisted.
    #[serde(default)]
    pub template_id: Option<String>,
    /// The employee's monthly CTC.
    pub monthly_ctc: Decimal,
    /// Payment fields selected on the template.
    #[serde(default)]
    pub payment_fields: Vec<PaymentField>,
    /// EPF scheme, if the template deducts EPF.
    #[serde(default)]
    pub epf: Option<EpfScheme>,
    /// ESI scheme, if the template deducts ESI.
    #[serde(default)]
    pub esi: Option<EsiScheme>,
    /// Professional tax scheme.
    #[serde(default)]
    pub professional_tax: Option<ProfessionalTax>,
    /// Labour welfare fund scheme.
    #[serde(default)]
    pub lwf: Option<LabourWelfareFund>,
    /// Statutory bonus scheme.
    #[serde(default)]
    pub bonus: Option<StatutoryBonus>,
    /// Components submitted with the current edit; they win over stored ones.
    #[serde(default)]
    pub prioritized_components: Vec<PaymentTemplateComponent>,
    /// Components currently stored for the template.
    #[serde(default)]
    pub existing_components: Vec<PaymentTemplateComponent>,
}

impl TemplateInput {
    /// Finds the prioritized and existing components for a target.
    ///
    /// Payment fields match on their id; a template holds at most one
    /// component per statutory scheme, so those match on target type alone.
    pub fn context_for(&self, target: &ComponentTarget) -> ComponentContext<'_> {
        let matches = |component: &&PaymentTemplateComponent| match target.target_type() {
            TargetType::PaymentField => component.target == *target,
            other => component.target_type() == other,
        };

        ComponentContext::new(
            self.prioritized_components.iter().find(matches),
            self.existing_components.iter().find(matches),
        )
    }

    fn validate(&self) -> EngineResult<()> {
        if self.monthly_ctc < Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: format!("monthly CTC cannot be negative: {}", self.monthly_ctc),
            });
        }

        let mut seen = HashSet::new();
        for field in &self.payment_fields {
            if !seen.insert(field.id.as_str()) {
                return Err(EngineError::InvalidComponent {
                    component: field.id.clone(),
                    message: "payment field selected more than once".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Collects audit steps and warnings in calculation order.
#[derive(Debug, Default)]
struct TraceRecorder {
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl TraceRecorder {
    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }

    fn finish(self, duration_us: u64) -> AuditTrace {
        AuditTrace {
            steps: self.steps,
            warnings: self.warnings,
            duration_us,
        }
    }
}

fn render(value: Option<Amount>) -> serde_json::Value {
    match value {
        Some(amount) => serde_json::Value::String(amount.to_string()),
        None => serde_json::Value::Null,
    }
}

fn component_value(component: &PaymentTemplateComponent) -> Decimal {
    component.calculation_value.unwrap_or_else(Amount::zero).value()
}

/// Warns when the legacy policy replaced a computed zero.
fn check_zero_fallback(
    trace: &mut TraceRecorder,
    code: &str,
    scheme: &str,
    calculated: Decimal,
    component: &PaymentTemplateComponent,
    policy: ZeroFallback,
) {
    if policy == ZeroFallback::Legacy && calculated.is_zero() {
        let message = match component.calculation_value {
            Some(stored) => format!(
                "{} calculated as 0.00 was replaced by the stored value {}",
                scheme, stored
            ),
            None => format!("{} calculated as 0.00 was left without a value", scheme),
        };
        trace.warn(code, message, "medium");
    }
}

/// Calculates every component of a payment template.
///
/// Inactive payment fields are skipped and calculators that return no
/// component are omitted. Fails on duplicate payment fields, a negative CTC,
/// a malformed professional tax slab table, or decimal overflow.
pub fn calculate_template(
    input: &TemplateInput,
    config: &CalculatorConfig,
) -> EngineResult<TemplateCalculation> {
    let start_time = Instant::now();
    input.validate()?;

    let defaults = &config.defaults;
    let policy = config.zero_fallback;
    let mut trace = TraceRecorder::default();
    let mut components = Vec::new();

    let mut gross_values = WageValues::new();
    let mut epf_values = WageValues::new();
    let mut esi_values = WageValues::new();

    for field in input.payment_fields.iter().filter(|f| f.is_active) {
        let target = ComponentTarget::PaymentField {
            payment_field_id: field.id.clone(),
        };
        let context = input.context_for(&target);
        let calculated = payment_field_value(field, input.monthly_ctc)?;

        let Some(component) = payment_field_component(Some(field), input.monthly_ctc, &context)? else {
            continue;
        };
        let value = component_value(&component);

        gross_values.insert(field.id.clone(), value);
        if field.consider_for_epf {
            epf_values.insert(field.id.clone(), value);
        }
        if field.consider_for_esi {
            esi_values.insert(field.id.clone(), value);
        }

        let reasoning = match calculated {
            Some(_) => format!("{} calculated from {:?} rule", field.name, field.calculation_type),
            None => format!("{} is not pre-calculated; stored value kept", field.name),
        };
        trace.step(
            "payment_field",
            "Payment Field",
            serde_json::json!({
                "payment_field_id": field.id,
                "payment_type": field.payment_type,
                "calculation_type": field.calculation_type,
                "amount": field.amount.map(|a| a.to_string()),
                "monthly_ctc": input.monthly_ctc.to_string()
            }),
            serde_json::json!({ "calculation_value": render(component.calculation_value) }),
            reasoning,
        );
        components.push(component);
    }

    let gross = gross_value(&gross_values)?;
    let epf_eligible = gross_value(&epf_values)?;
    let epf_wages = value_for_epf(input.epf.as_ref(), &epf_values, defaults)?;
    let esi_eligible = gross_value(&esi_values)?;
    let esi_wages = value_for_esi(input.esi.as_ref(), &esi_values, defaults)?;

    if let Some(epf) = &input.epf {
        let context = input.context_for(&ComponentTarget::Epf {
            epf_id: epf.id.clone(),
        });
        if let Some(component) = epf_component(Some(epf), epf_wages, &context, defaults)? {
            trace.step(
                "epf",
                "Employee Provident Fund",
                serde_json::json!({
                    "epf_eligible": epf_eligible.to_string(),
                    "epf_wages": epf_wages.to_string(),
                    "employee_contribution": epf
                        .employee_contribution
                        .unwrap_or(defaults.epf_rate)
                        .to_string()
                }),
                serde_json::json!({ "calculation_value": render(component.calculation_value) }),
                if epf_wages < epf_eligible {
                    format!("EPF wages capped at {} (eligible {})", epf_wages, epf_eligible)
                } else {
                    format!("EPF on wages of {}", epf_wages)
                },
            );
            components.push(component);
        }
    }

    if let Some(esi) = &input.esi {
        let context = input.context_for(&ComponentTarget::Esi {
            esi_id: esi.id.clone(),
        });
        if let Some(component) = esi_component(Some(esi), esi_wages, &context, defaults)? {
            let waived = esi_wages.is_zero() && !esi_eligible.is_zero();
            if waived {
                trace.warn(
                    "ESI_CEILING_EXCEEDED",
                    format!(
                        "ESI wages of {} exceed the ceiling; contribution waived",
                        esi_eligible
                    ),
                    "low",
                );
            }
            trace.step(
                "esi",
                "Employee State Insurance",
                serde_json::json!({
                    "esi_eligible": esi_eligible.to_string(),
                    "esi_wages": esi_wages.to_string(),
                    "max_limit": esi.max_limit.unwrap_or(defaults.esi_max_limit).to_string()
                }),
                serde_json::json!({ "calculation_value": render(component.calculation_value) }),
                if waived {
                    "ESI waived above wage ceiling".to_string()
                } else {
                    format!("ESI on wages of {}", esi_wages)
                },
            );
            components.push(component);
        }
    }

    if let Some(pt) = &input.professional_tax {
        let context = input.context_for(&ComponentTarget::Pt {
            pt_id: pt.id.clone(),
        });
        let calculated = professional_tax_value(pt, gross)?;
        if let Some(component) = professional_tax_component(Some(pt), gross, &context, policy)? {
            let tax = calculated.unwrap_or(Decimal::ZERO);
            check_zero_fallback(
                &mut trace,
                "PT_ZERO_FALLBACK",
                "Professional tax",
                tax,
                &component,
                policy,
            );
            trace.step(
                "professional_tax",
                "Professional Tax",
                serde_json::json!({ "gross": gross.to_string() }),
                serde_json::json!({
                    "slab_value": tax.to_string(),
                    "calculation_value": render(component.calculation_value)
                }),
                format!("Slab lookup on gross {} gave {}", gross, tax),
            );
            components.push(component);
        }
    }

    if let Some(lwf) = &input.lwf {
        let context = input.context_for(&ComponentTarget::Lwf {
            lwf_id: lwf.id.clone(),
        });
        if let Some(component) = lwf_component(Some(lwf), &context, policy) {
            let monthly = lwf_monthly_value(lwf);
            check_zero_fallback(
                &mut trace,
                "LWF_ZERO_FALLBACK",
                "Labour welfare fund",
                monthly,
                &component,
                policy,
            );
            trace.step(
                "lwf",
                "Labour Welfare Fund",
                serde_json::json!({
                    "employee_contribution": lwf.employee_contribution.map(|c| c.to_string()),
                    "deduction_cycle": lwf.deduction_cycle
                }),
                serde_json::json!({ "calculation_value": render(component.calculation_value) }),
                format!("{:?} contribution spread to a monthly {}", lwf.deduction_cycle, monthly),
            );
            components.push(component);
        }
    }

    if let Some(bonus) = &input.bonus {
        let context = input.context_for(&ComponentTarget::Bonus {
            bonus_id: bonus.id.clone(),
        });
        if let Some(component) = bonus_component(Some(bonus), epf_eligible, &context)? {
            trace.step(
                "bonus",
                "Statutory Bonus",
                serde_json::json!({
                    "base": epf_eligible.to_string(),
                    "percentage": bonus.percentage.map(|p| p.to_string())
                }),
                serde_json::json!({ "calculation_value": render(component.calculation_value) }),
                match bonus_value(bonus, epf_eligible)? {
                    Some(value) => format!("Bonus of {} on base {}", value, epf_eligible),
                    None => "No bonus percentage; stored value kept".to_string(),
                },
            );
            components.push(component);
        }
    }

    let total_of = |component_type: ComponentType| -> EngineResult<Decimal> {
        components
            .iter()
            .filter(|c| c.component_type == component_type)
            .map(component_value)
            .try_fold(Decimal::ZERO, |total, value| {
                total
                    .checked_add(value)
                    .ok_or_else(|| overflow(&format!("{:?} total", component_type)))
            })
    };
    let totals = TemplateTotals {
        gross,
        epf_wages,
        esi_wages,
        earnings_total: total_of(ComponentType::Earning)?,
        statutory_total: total_of(ComponentType::StatutoryContribution)?,
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        template_id = ?input.template_id,
        components = components.len(),
        warnings = trace.warnings.len(),
        duration_us,
        "Template calculated"
    );

    Ok(TemplateCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        template_id: input.template_id.clone(),
        components,
        totals,
        audit_trace: trace.finish(duration_us),
    })
}
