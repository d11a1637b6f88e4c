//! Payroll Component Engine for Indian payment templates
//!
//! This crate calculates the components of a payroll payment template:
//! fixed and percentage-of-CTC payment fields plus the statutory schemes
//! EPF, ESI, Professional Tax, Labour Welfare Fund and Statutory Bonus.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
