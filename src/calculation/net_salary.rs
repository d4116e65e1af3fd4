//! Forward conversion from gross to net salary.

use crate::config::RateConfiguration;
use crate::models::SalaryBreakdown;

use super::contributions::compute_contributions;
use super::income_tax::compute_tax;

/// Converts a gross salary into a full breakdown.
///
/// Contributions are deducted from gross, the allowance-clamped income tax is
/// levied on what remains, and net is the remainder after both. The function
/// is total: every `f64` input produces a breakdown, and the identity
/// `net == gross - contributions.total - tax.income_tax` holds exactly for
/// finite inputs.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_net_salary;
/// use salary_engine::config::RateConfiguration;
///
/// let breakdown = compute_net_salary(65000.0, &RateConfiguration::default());
/// assert_eq!(breakdown.contributions.total, 18200.0);
/// assert_eq!(breakdown.tax.income_tax, 3586.8);
/// assert_eq!(breakdown.net, 43213.2);
/// ```
pub fn compute_net_salary(gross: f64, rates: &RateConfiguration) -> SalaryBreakdown {
    let contributions = compute_contributions(gross, rates);
    let gross_after_contributions = gross - contributions.total;
    let tax = compute_tax(gross_after_contributions, rates);
    let net = gross_after_contributions - tax.income_tax;

    SalaryBreakdown {
        gross,
        net,
        contributions,
        tax,
    }
}
