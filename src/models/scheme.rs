//! Statutory scheme definitions.
//!
//! Each scheme carries its own rates, caps and slabs. Optional rates fall back
//! to the configured [`StatutoryDefaults`](crate::config::StatutoryDefaults)
//! at calculation time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee Provident Fund configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfScheme {
    /// Unique identifier for the scheme.
    pub id: String,
    /// Employee contribution as a fraction (e.g., 0.12).
    #[serde(default)]
    pub employee_contribution: Option<Decimal>,
    /// Whether EPF wages are capped at `employee_restrict_value`.
    #[serde(default)]
    pub restrict_employee_contribution: bool,
    /// The EPF wage cap.
    #[serde(default)]
    pub employee_restrict_value: Option<Decimal>,
}

/// Employee State Insurance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsiScheme {
    /// Unique identifier for the scheme.
    pub id: String,
    /// Employee contribution as a fraction (e.g., 0.0075).
    #[serde(default)]
    pub employees_contribution: Option<Decimal>,
    /// Wage ceiling above which no ESI is deducted.
    #[serde(default)]
    pub max_limit: Option<Decimal>,
}

/// One professional tax slab. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtSlab {
    /// Lower bound of the gross salary range.
    pub start: Decimal,
    /// Upper bound of the gross salary range.
    pub end: Decimal,
    /// Tax payable when the gross salary falls in this range.
    pub value: Decimal,
}

impl PtSlab {
    /// Returns true if `value` lies within `start..=end`.
    pub fn contains(&self, value: Decimal) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Professional tax configuration.
///
/// The slab table is stored by the hosting database as serialized JSON text,
/// so it is kept as text here and parsed when the tax is calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalTax {
    /// Unique identifier for the scheme.
    pub id: String,
    /// Serialized JSON array of `{start, end, value}` slabs.
    #[serde(default)]
    pub gross_salary_range: Option<String>,
}

/// How often the labour welfare fund is deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCycle {
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    HalfYearly,
    /// Once a year.
    Yearly,
    /// Any cycle not recognised by the engine.
    #[serde(other)]
    Unknown,
}

impl DeductionCycle {
    /// Number of months covered by one deduction, if the cycle is known.
    pub fn months(&self) -> Option<u32> {
        match self {
            DeductionCycle::Monthly => Some(1),
            DeductionCycle::Quarterly => Some(3),
            DeductionCycle::HalfYearly => Some(6),
            DeductionCycle::Yearly => Some(12),
            DeductionCycle::Unknown => None,
        }
    }
}

/// Labour Welfare Fund configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabourWelfareFund {
    /// Unique identifier for the scheme.
    pub id: String,
    /// Employee contribution per deduction cycle.
    #[serde(default)]
    pub employee_contribution: Option<Decimal>,
    /// The deduction cycle.
    pub deduction_cycle: DeductionCycle,
}

/// Statutory bonus configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryBonus {
    /// Unique identifier for the scheme.
    pub id: String,
    /// Bonus as a whole-number percentage (e.g., 8.33).
    #[serde(default)]
    pub percentage: Option<Decimal>,
}
