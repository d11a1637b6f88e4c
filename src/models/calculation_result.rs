//! Calculation result models for the Payroll Component Engine.
//!
//! This module contains the [`TemplateCalculation`] type and its associated
//! structures that capture all outputs from a payment template calculation,
//! including the components, wage totals, and audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PaymentTemplateComponent;

/// Aggregated wage bases and totals for a template calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TemplateTotals;
/// use rust_decimal::Decimal;
///
/// let totals = TemplateTotals {
///     gross: Decimal::from(30000),
///     epf_wages: Decimal::from(15000),
///     esi_wages: Decimal::ZERO,
///     earnings_total: Decimal::from(30000),
///     statutory_total: Decimal::from(2000),
/// };
/// assert_eq!(totals.gross, Decimal::from(30000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTotals {
    /// Sum of all payment field values.
    pub gross: Decimal,
    /// EPF wage base after the wage cap.
    pub epf_wages: Decimal,
    /// ESI wage base, zero once the wage ceiling is crossed.
    pub esi_wages: Decimal,
    /// Sum of earning component values.
    pub earnings_total: Decimal,
    /// Sum of statutory contribution component values.
    pub statutory_total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payment template calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, TemplateCalculation, TemplateTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = TemplateCalculation {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     template_id: Some("tpl_001".to_string()),
///     components: vec![],
///     totals: TemplateTotals {
///         gross: Decimal::ZERO,
///         epf_wages: Decimal::ZERO,
///         esi_wages: Decimal::ZERO,
///         earnings_total: Decimal::ZERO,
///         statutory_total: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.components.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that performed the calculation.
    pub engine_version: String,
    /// The payment template being calculated, if already persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Calculated components, in calculation order.
    pub components: Vec<PaymentTemplateComponent>,
    /// Wage bases and totals.
    pub totals: TemplateTotals,
    /// Audit trace of every rule application.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_calculation_deserialization() {
        let json = r#"{
            "calculation_id": "12345678-1234-1234-1234-123456789012",
            "timestamp": "2026-01-15T10:00:00Z",
            "engine_version": "0.1.0",
            "components": [
                {
                    "target_type": "esi",
                    "esi_id": "esi_001",
                    "component_type": "statutory_contribution",
                    "calculation_value": "112.50"
                }
            ],
            "totals": {
                "gross": "15000",
                "epf_wages": "15000",
                "esi_wages": "15000",
                "earnings_total": "15000",
                "statutory_total": "112.50"
            },
            "audit_trace": {
                "steps": [],
                "warnings": [],
                "duration_us": 0
            }
        }"#;

        let result: TemplateCalculation = serde_json::from_str(json).unwrap();
        assert_eq!(result.engine_version, "0.1.0");
        assert_eq!(result.template_id, None);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.totals.statutory_total, Decimal::new(11250, 2));
    }

    #[test]
    fn test_template_id_skipped_when_absent() {
        let result = TemplateCalculation {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            template_id: None,
            components: vec![],
            totals: TemplateTotals {
                gross: Decimal::ZERO,
                epf_wages: Decimal::ZERO,
                esi_wages: Decimal::ZERO,
                earnings_total: Decimal::ZERO,
                statutory_total: Decimal::ZERO,
            },
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("template_id"));
    }

    #[test]
    fn test_audit_steps_ordered() {
        let trace = AuditTrace {
            steps: (1..=3)
                .map(|n| AuditStep {
                    step_number: n,
                    rule_id: format!("rule_{:03}", n),
                    rule_name: format!("Step {}", n),
                    input: serde_json::json!({}),
                    output: serde_json::json!({}),
                    reasoning: String::new(),
                })
                .collect(),
            warnings: vec![],
            duration_us: 1000,
        };

        let step_numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }
}
