//! Calculation logic for the Payroll Component Engine.
//!
//! This module contains the per-component calculators (payment fields, EPF,
//! ESI, professional tax, labour welfare fund and statutory bonus), the wage
//! aggregation helpers that produce their bases, and the template-level
//! calculation that runs them all.

mod aggregate;
mod bonus;
mod epf;
mod esi;
mod fallback;
mod labour_welfare_fund;
mod payment_field;
mod professional_tax;
mod template;

pub use aggregate::{WageValues, gross_value};
pub use bonus::{bonus_component, bonus_value};
pub use epf::{epf_component, epf_contribution, value_for_epf};
pub use esi::{esi_component, esi_contribution, value_for_esi};
pub use labour_welfare_fund::{lwf_component, lwf_monthly_value};
pub use payment_field::{payment_field_component, payment_field_value};
pub use professional_tax::{parse_slabs, professional_tax_component, professional_tax_value};
pub use template::{TemplateInput, calculate_template};
