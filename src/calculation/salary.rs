//! Direction dispatch for salary conversions.

use crate::config::RateConfiguration;
use crate::models::{SalaryBreakdown, SalaryInput};

use super::gross_salary::compute_gross_salary;
use super::net_salary::compute_net_salary;

/// Converts a tagged salary amount into a full breakdown.
///
/// Gross amounts go through [`compute_net_salary`], net amounts through
/// [`compute_gross_salary`].
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_salary;
/// use salary_engine::config::RateConfiguration;
/// use salary_engine::models::SalaryInput;
///
/// let rates = RateConfiguration::default();
/// let breakdown = compute_salary(SalaryInput::Gross(65000.0), &rates);
/// assert_eq!(breakdown.net, 43213.2);
/// ```
pub fn compute_salary(input: SalaryInput, rates: &RateConfiguration) -> SalaryBreakdown {
    match input {
        SalaryInput::Gross(gross) => compute_net_salary(gross, rates),
        SalaryInput::Net(net) => compute_gross_salary(net, rates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RATES;

    /// SD-001: zero gross dispatches to all-zero breakdown
    #[test]
    fn test_zero_gross_input() {
        let result = compute_salary(SalaryInput::Gross(0.0), &DEFAULT_RATES);

        assert_eq!(result.gross, 0.0);
        assert_eq!(result.net, 0.0);
        assert_eq!(result.contributions.pension_and_disability, 0.0);
        assert_eq!(result.contributions.health_insurance, 0.0);
        assert_eq!(result.contributions.additional_health_insurance, 0.0);
        assert_eq!(result.contributions.unemployment_insurance, 0.0);
        assert_eq!(result.contributions.total, 0.0);
        assert_eq!(result.tax.taxable_base, 0.0);
        assert_eq!(result.tax.income_tax, 0.0);
    }

    #[test]
    fn test_gross_input_matches_forward_conversion() {
        let result = compute_salary(SalaryInput::Gross(65000.0), &DEFAULT_RATES);
        assert_eq!(result, compute_net_salary(65000.0, &DEFAULT_RATES));
    }

    #[test]
    fn test_net_input_matches_inverse_conversion() {
        let result = compute_salary(SalaryInput::Net(43213.2), &DEFAULT_RATES);
        assert_eq!(result, compute_gross_salary(43213.2, &DEFAULT_RATES));
    }
}
