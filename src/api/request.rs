//! Request types for the Payroll Component Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::TemplateInput;
use crate::models::{
    EpfScheme, EsiScheme, LabourWelfareFund, PaymentField, PaymentTemplateComponent,
    ProfessionalTax, StatutoryBonus,
};

use super::response::ApiError;

/// Request body for the `/calculate` endpoint.
///
/// CTC may be given monthly or annually; when both are present the monthly
/// value is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCalculationRequest {
    /// The template being calculated, if already persisted.
    #[serde(default)]
    pub template_id: Option<String>,
    /// The employee's monthly CTC.
    #[serde(default)]
    pub monthly_ctc: Option<Decimal>,
    /// The employee's annual CTC, divided by twelve when no monthly CTC is given.
    #[serde(default)]
    pub annual_ctc: Option<Decimal>,
    /// Payment fields selected on the template.
    #[serde(default)]
    pub payment_fields: Vec<PaymentField>,
    /// Statutory schemes applied by the template.
    #[serde(default)]
    pub schemes: SchemesRequest,
    /// Components submitted with the current edit.
    #[serde(default)]
    pub prioritized_components: Vec<PaymentTemplateComponent>,
    /// Components currently stored for the template.
    #[serde(default)]
    pub existing_components: Vec<PaymentTemplateComponent>,
}

/// Statutory schemes in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemesRequest {
    /// Employee Provident Fund.
    #[serde(default)]
    pub epf: Option<EpfScheme>,
    /// Employee State Insurance.
    #[serde(default)]
    pub esi: Option<EsiScheme>,
    /// Professional Tax.
    #[serde(default)]
    pub pt: Option<ProfessionalTax>,
    /// Labour Welfare Fund.
    #[serde(default)]
    pub lwf: Option<LabourWelfareFund>,
    /// Statutory Bonus.
    #[serde(default)]
    pub bonus: Option<StatutoryBonus>,
}

impl TryFrom<TemplateCalculationRequest> for TemplateInput {
    type Error = ApiError;

    fn try_from(req: TemplateCalculationRequest) -> Result<Self, Self::Error> {
        let monthly_ctc = match (req.monthly_ctc, req.annual_ctc) {
            (Some(monthly), _) => monthly,
            (None, Some(annual)) => annual / Decimal::from(12),
            (None, None) => {
                return Err(ApiError::missing_ctc());
            }
        };

        Ok(TemplateInput {
            template_id: req.template_id,
            monthly_ctc,
            payment_fields: req.payment_fields,
            epf: req.schemes.epf,
            esi: req.schemes.esi,
            professional_tax: req.schemes.pt,
            lwf: req.schemes.lwf,
            bonus: req.schemes.bonus,
            prioritized_components: req.prioritized_components,
            existing_components: req.existing_components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "template_id": "tpl_001",
            "monthly_ctc": "20000",
            "payment_fields": [
                {
                    "id": "basic",
                    "name": "Basic",
                    "payment_type": "fixed",
                    "calculation_type": "percentage_of_ctc",
                    "amount": "50",
                    "consider_for_epf": true
                }
            ],
            "schemes": {
                "epf": { "id": "epf_001", "employee_contribution": "0.12" },
                "lwf": { "id": "lwf_001", "employee_contribution": "1200", "deduction_cycle": "yearly" }
            }
        }"#;

        let request: TemplateCalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payment_fields.len(), 1);
        assert!(request.schemes.epf.is_some());
        assert!(request.schemes.esi.is_none());

        let input: TemplateInput = request.try_into().unwrap();
        assert_eq!(input.monthly_ctc, Decimal::from(20000));
        assert!(input.lwf.is_some());
    }

    #[test]
    fn test_annual_ctc_is_divided_by_twelve() {
        let request: TemplateCalculationRequest =
            serde_json::from_str(r#"{ "annual_ctc": "240000" }"#).unwrap();

        let input: TemplateInput = request.try_into().unwrap();
        assert_eq!(input.monthly_ctc, Decimal::from(20000));
    }

    #[test]
    fn test_monthly_ctc_wins_over_annual() {
        let request: TemplateCalculationRequest =
            serde_json::from_str(r#"{ "monthly_ctc": "15000", "annual_ctc": "240000" }"#).unwrap();

        let input: TemplateInput = request.try_into().unwrap();
        assert_eq!(input.monthly_ctc, Decimal::from(15000));
    }

    #[test]
    fn test_missing_ctc_is_rejected() {
        let request: TemplateCalculationRequest = serde_json::from_str("{}").unwrap();

        let error = TemplateInput::try_from(request).unwrap_err();
        assert_eq!(error.code, "MISSING_FIELD");
        assert!(error.message.contains("monthly_ctc"));
    }
}
