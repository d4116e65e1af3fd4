//! Employee contribution calculation.
//!
//! Contributions are flat percentages of gross salary with no ceiling or
//! floor, so each amount is a single multiplication.

use crate::config::RateConfiguration;
use crate::models::ContributionsBreakdown;

/// Returns the sum of the four contribution rates.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::total_contribution_rate;
/// use salary_engine::config::RateConfiguration;
///
/// assert_eq!(total_contribution_rate(&RateConfiguration::default()), 0.28);
/// ```
pub fn total_contribution_rate(rates: &RateConfiguration) -> f64 {
    let c = &rates.contributions;
    c.pension_and_disability
        + c.health_insurance
        + c.unemployment_insurance
        + c.additional_health_insurance
}

/// Computes the itemized contributions owed on `gross`.
///
/// Negative amounts are not rejected; they produce negative contributions.
/// `total` is summed from the same four products in a fixed order, so it is
/// always reproducible from the individual fields.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_contributions;
/// use salary_engine::config::RateConfiguration;
///
/// let result = compute_contributions(65000.0, &RateConfiguration::default());
/// assert_eq!(result.health_insurance, 4875.0);
/// assert_eq!(result.total, 18200.0);
/// ```
pub fn compute_contributions(gross: f64, rates: &RateConfiguration) -> ContributionsBreakdown {
    let c = &rates.contributions;

    let pension_and_disability = gross * c.pension_and_disability;
    let health_insurance = gross * c.health_insurance;
    let additional_health_insurance = gross * c.additional_health_insurance;
    let unemployment_insurance = gross * c.unemployment_insurance;

    let total = pension_and_disability
        + health_insurance
        + additional_health_insurance
        + unemployment_insurance;

    ContributionsBreakdown {
        pension_and_disability,
        health_insurance,
        additional_health_insurance,
        unemployment_insurance,
        total,
    }
}
