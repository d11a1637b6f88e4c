//! Core data models for the Payroll Component Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod amount;
mod calculation_result;
mod component;
mod payment_field;
mod scheme;

pub use amount::Amount;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, TemplateCalculation, TemplateTotals};
pub use component::{
    ComponentContext, ComponentTarget, ComponentType, PaymentTemplateComponent, TargetType,
};
pub use payment_field::{CalculationType, PaymentField, PaymentType};
pub use scheme::{
    DeductionCycle, EpfScheme, EsiScheme, LabourWelfareFund, ProfessionalTax, PtSlab,
    StatutoryBonus,
};
