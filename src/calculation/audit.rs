//! Audited salary conversion.
//!
//! [`explain_salary`] runs the same steps as
//! [`compute_salary`](super::compute_salary) and records each one as an
//! [`AuditStep`], so a caller can show how a breakdown was reached.

use crate::config::RateConfiguration;
use crate::models::{AuditStep, SalaryBreakdown, SalaryExplanation, SalaryInput};

use super::contributions::total_contribution_rate;
use super::gross_salary::{
    InverseBranch, TaxThreshold, compute_threshold, select_branch, solve_gross,
};
use super::net_salary::compute_net_salary;

/// Converts a tagged salary amount and records the audit steps.
///
/// The breakdown is identical to the one `compute_salary` returns for the
/// same input. Net inputs produce `tax_threshold` and `inverse_branch` steps
/// ahead of the forward steps for the solved gross.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::explain_salary;
/// use salary_engine::config::RateConfiguration;
/// use salary_engine::models::SalaryInput;
///
/// let explanation = explain_salary(SalaryInput::Gross(65000.0), &RateConfiguration::default());
/// let rules: Vec<&str> = explanation.steps.iter().map(|s| s.rule_id.as_str()).collect();
/// assert_eq!(rules, ["contributions", "income_tax", "net_salary"]);
/// ```
pub fn explain_salary(input: SalaryInput, rates: &RateConfiguration) -> SalaryExplanation {
    let mut steps = Vec::new();
    let mut step_number: u32 = 1;

    let gross = match input {
        SalaryInput::Gross(gross) => gross,
        SalaryInput::Net(net) => {
            let threshold = compute_threshold(rates);
            steps.push(threshold_step(&threshold, rates, step_number));
            step_number += 1;

            let branch = select_branch(net, &threshold);
            let gross = solve_gross(net, branch, rates);
            steps.push(branch_step(net, &threshold, branch, gross, step_number));
            step_number += 1;

            gross
        }
    };

    let breakdown = compute_net_salary(gross, rates);
    steps.extend(forward_steps(&breakdown, rates, step_number));

    SalaryExplanation { breakdown, steps }
}

fn threshold_step(
    threshold: &TaxThreshold,
    rates: &RateConfiguration,
    step_number: u32,
) -> AuditStep {
    let contribution_rate = total_contribution_rate(rates);

    AuditStep {
        step_number,
        rule_id: "tax_threshold".to_string(),
        rule_name: "Tax Threshold".to_string(),
        input: serde_json::json!({
            "allowance": rates.allowance,
            "contribution_rate": contribution_rate
        }),
        output: serde_json::json!({
            "threshold_gross": threshold.gross,
            "threshold_net": threshold.net
        }),
        reasoning: format!(
            "{} / (1 - {}) = {} gross, {} net",
            rates.allowance, contribution_rate, threshold.gross, threshold.net
        ),
    }
}

fn branch_step(
    net: f64,
    threshold: &TaxThreshold,
    branch: InverseBranch,
    gross: f64,
    step_number: u32,
) -> AuditStep {
    let reasoning = match branch {
        InverseBranch::NoTax => format!(
            "Net {} is at or below threshold {}: only contributions are reversed, gross = {}",
            net, threshold.net, gross
        ),
        InverseBranch::Taxable => format!(
            "Net {} is above threshold {}: contributions and tax are reversed, gross = {}",
            net, threshold.net, gross
        ),
    };

    AuditStep {
        step_number,
        rule_id: "inverse_branch".to_string(),
        rule_name: "Inverse Branch Selection".to_string(),
        input: serde_json::json!({
            "net": net,
            "threshold_net": threshold.net
        }),
        output: serde_json::json!({
            "branch": branch,
            "gross": gross
        }),
        reasoning,
    }
}

fn forward_steps(
    breakdown: &SalaryBreakdown,
    rates: &RateConfiguration,
    first_step: u32,
) -> Vec<AuditStep> {
    let contributions = &breakdown.contributions;
    let gross_after_contributions = breakdown.gross_after_contributions();

    let contributions_step = AuditStep {
        step_number: first_step,
        rule_id: "contributions".to_string(),
        rule_name: "Employee Contributions".to_string(),
        input: serde_json::json!({
            "gross": breakdown.gross,
            "rates": rates.contributions
        }),
        output: serde_json::json!(contributions),
        reasoning: format!(
            "{} x {} = {}",
            breakdown.gross,
            total_contribution_rate(rates),
            contributions.total
        ),
    };

    let tax_reasoning = if breakdown.tax.taxable_base > 0.0 {
        format!(
            "({} - {}) x {} = {}",
            gross_after_contributions, rates.allowance, rates.tax, breakdown.tax.income_tax
        )
    } else {
        format!(
            "{} does not exceed allowance {}: no income tax",
            gross_after_contributions, rates.allowance
        )
    };

    let tax_step = AuditStep {
        step_number: first_step + 1,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "gross_after_contributions": gross_after_contributions,
            "allowance": rates.allowance,
            "tax_rate": rates.tax
        }),
        output: serde_json::json!(breakdown.tax),
        reasoning: tax_reasoning,
    };

    let net_step = AuditStep {
        step_number: first_step + 2,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross": breakdown.gross,
            "contributions_total": contributions.total,
            "income_tax": breakdown.tax.income_tax
        }),
        output: serde_json::json!({ "net": breakdown.net }),
        reasoning: format!(
            "{} - {} - {} = {}",
            breakdown.gross, contributions.total, breakdown.tax.income_tax, breakdown.net
        ),
    };

    vec![contributions_step, tax_step, net_step]
}
