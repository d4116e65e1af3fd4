//! Calculation result models for the salary engine.
//!
//! This module contains the [`CalculationResult`] envelope returned by the
//! HTTP API and the audit types that record how a breakdown was derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SalaryBreakdown, SalaryInput};
use crate::config::RateConfiguration;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A breakdown together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryExplanation {
    /// The computed breakdown, identical to what `compute_salary` returns.
    pub breakdown: SalaryBreakdown,
    /// The ordered audit steps.
    pub steps: Vec<AuditStep>,
}

/// The complete result of a salary calculation request.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_salary;
/// use salary_engine::config::RateConfiguration;
/// use salary_engine::models::{AuditTrace, CalculationResult, SalaryInput};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let rates = RateConfiguration::default();
/// let input = SalaryInput::Gross(65000.0);
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     input,
///     rates,
///     breakdown: compute_salary(input, &rates),
///     audit_trace: AuditTrace {
///         steps: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(result.breakdown.gross, 65000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The amount the calculation started from.
    pub input: SalaryInput,
    /// The rates the calculation used.
    pub rates: RateConfiguration,
    /// The resulting breakdown.
    pub breakdown: SalaryBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
