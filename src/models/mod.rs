//! Core data models for the salary engine.
//!
//! This module contains the value types exchanged with the conversion engine.

mod breakdown;
mod calculation_result;
mod salary_input;

pub use breakdown::{ContributionsBreakdown, SalaryBreakdown, TaxBreakdown};
pub use calculation_result::{AuditStep, AuditTrace, CalculationResult, SalaryExplanation};
pub use salary_input::{SalaryInput, SalaryKind};
