//! Inverse conversion from net to gross salary.
//!
//! The forward conversion is piecewise linear with a single kink where income
//! after contributions reaches the allowance. Below the kink only the
//! contributions have to be undone; above it the flat tax has to be undone
//! as well. The inverse therefore locates the kink first and then applies
//! the closed form for the matching branch.

use serde::{Deserialize, Serialize};

use crate::config::RateConfiguration;
use crate::models::SalaryBreakdown;

use super::contributions::total_contribution_rate;
use super::net_salary::compute_net_salary;

/// The salary level at which the taxable base becomes positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxThreshold {
    /// Gross salary whose income after contributions equals the allowance.
    pub gross: f64,
    /// Net salary at that gross. Below the threshold net equals income after
    /// contributions, so this is the allowance itself for sane rates.
    pub net: f64,
}

/// Which closed form inverts a given net amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InverseBranch {
    /// Net at or below the threshold: only contributions are undone.
    NoTax,
    /// Net above the threshold: contributions and tax are undone together.
    Taxable,
}

/// Computes the gross and net salary at the tax threshold.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_threshold;
/// use salary_engine::config::RateConfiguration;
///
/// let threshold = compute_threshold(&RateConfiguration::default());
/// assert_eq!(threshold.net, 10932.0);
/// assert!((threshold.gross - 15183.333333333334).abs() < 1e-9);
/// ```
pub fn compute_threshold(rates: &RateConfiguration) -> TaxThreshold {
    let retained = 1.0 - total_contribution_rate(rates);
    let gross = rates.allowance / retained;

    TaxThreshold {
        gross,
        net: retained * gross,
    }
}

/// Picks the inverse branch for `net`.
///
/// A net amount exactly on the threshold resolves to [`InverseBranch::NoTax`].
pub fn select_branch(net: f64, threshold: &TaxThreshold) -> InverseBranch {
    if net <= threshold.net {
        InverseBranch::NoTax
    } else {
        InverseBranch::Taxable
    }
}

/// Solves for the gross salary that yields `net` on the given branch.
///
/// The taxable form follows from substituting
/// `income_tax = tax * (gross * (1 - c) - allowance)` into
/// `net = gross * (1 - c) - income_tax`.
pub fn solve_gross(net: f64, branch: InverseBranch, rates: &RateConfiguration) -> f64 {
    let retained = 1.0 - total_contribution_rate(rates);

    match branch {
        InverseBranch::NoTax => net / retained,
        InverseBranch::Taxable => {
            (net - rates.tax * rates.allowance) / (retained * (1.0 - rates.tax))
        }
    }
}

/// Converts a target net salary into a full breakdown.
///
/// The required gross is solved in closed form and then run through
/// [`compute_net_salary`], whose result is returned unchanged. The returned
/// breakdown is therefore always consistent with the forward model, while its
/// `net` matches the requested amount only to floating-point tolerance.
///
/// Negative targets fall into the no-tax branch and yield a negative gross.
/// Rates whose combined contribution rate reaches 1 divide by zero or flip
/// sign; the result is then infinite or NaN rather than an error.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_gross_salary;
/// use salary_engine::config::RateConfiguration;
///
/// let breakdown = compute_gross_salary(43213.2, &RateConfiguration::default());
/// assert!((breakdown.gross - 65000.0).abs() < 1e-6);
/// assert!((breakdown.net - 43213.2).abs() < 1e-6);
/// ```
pub fn compute_gross_salary(net: f64, rates: &RateConfiguration) -> SalaryBreakdown {
    let threshold = compute_threshold(rates);
    let branch = select_branch(net, &threshold);
    let gross = solve_gross(net, branch, rates);

    compute_net_salary(gross, rates)
}
