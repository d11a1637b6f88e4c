//! Payment field model.
//!
//! A payment field is a flat or percentage-of-CTC earning rule configured by
//! the employer and referenced from payment templates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a payment field pays a predetermined amount every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Paid every month according to the calculation type.
    Fixed,
    /// Entered per payroll run; never pre-calculated on the template.
    Variable,
}

/// How the amount of a fixed payment field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// `amount` is the monthly value.
    Fixed,
    /// `amount` is a percentage of the monthly CTC.
    PercentageOfCtc,
}

/// A payment field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentField {
    /// Unique identifier for the payment field.
    pub id: String,
    /// Display name (e.g., "Basic", "HRA").
    #[serde(default)]
    pub name: String,
    /// Fixed or variable payment.
    pub payment_type: PaymentType,
    /// Flat amount or percentage of CTC.
    pub calculation_type: CalculationType,
    /// The flat amount or the percentage, depending on `calculation_type`.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Whether the field counts towards EPF wages.
    #[serde(default)]
    pub consider_for_epf: bool,
    /// Whether the field counts towards ESI wages.
    #[serde(default)]
    pub consider_for_esi: bool,
    /// Inactive fields are skipped by template calculation.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl PaymentField {
    /// Returns true if the field is paid the same amount every month.
    pub fn is_fixed(&self) -> bool {
        self.payment_type == PaymentType::Fixed
    }
}
