//! Income tax calculation.

use crate::config::RateConfiguration;
use crate::models::TaxBreakdown;

/// Computes the taxable base and flat income tax on income after contributions.
///
/// The allowance is subtracted first and the result is floored at zero, so
/// income at or below the allowance carries no tax. This clamp is the only
/// non-linear step of the forward conversion.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_tax;
/// use salary_engine::config::RateConfiguration;
///
/// let tax = compute_tax(46800.0, &RateConfiguration::default());
/// assert_eq!(tax.taxable_base, 35868.0);
/// assert_eq!(tax.income_tax, 3586.8);
/// ```
pub fn compute_tax(gross_after_contributions: f64, rates: &RateConfiguration) -> TaxBreakdown {
    // f64::max would swallow a NaN income, keep it visible instead.
    let excess = gross_after_contributions - rates.allowance;
    let taxable_base = if excess > 0.0 || excess.is_nan() {
        excess
    } else {
        0.0
    };

    TaxBreakdown {
        taxable_base,
        income_tax: taxable_base * rates.tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RATES;

    /// TX-001: income below allowance is untaxed
    #[test]
    fn test_income_below_allowance_is_untaxed() {
        let result = compute_tax(5000.0, &DEFAULT_RATES);

        assert_eq!(result.taxable_base, 0.0);
        assert_eq!(result.income_tax, 0.0);
    }

    /// TX-002: income above allowance
    #[test]
    fn test_income_above_allowance() {
        let result = compute_tax(46800.0, &DEFAULT_RATES);

        assert_eq!(result.taxable_base, 35868.0);
        assert_eq!(result.income_tax, 3586.8);
    }

    /// TX-003: income exactly at allowance
    #[test]
    fn test_income_at_allowance_is_untaxed() {
        let result = compute_tax(10932.0, &DEFAULT_RATES);

        assert_eq!(result.taxable_base, 0.0);
        assert_eq!(result.income_tax, 0.0);
    }

    #[test]
    fn test_negative_income_is_clamped() {
        let result = compute_tax(-500.0, &DEFAULT_RATES);

        assert_eq!(result.taxable_base, 0.0);
        assert_eq!(result.income_tax, 0.0);
    }

    #[test]
    fn test_zero_allowance_taxes_everything() {
        let mut rates = DEFAULT_RATES;
        rates.allowance = 0.0;

        let result = compute_tax(1000.0, &rates);
        assert_eq!(result.taxable_base, 1000.0);
        assert_eq!(result.income_tax, 100.0);
    }

    #[test]
    fn test_nan_income_propagates() {
        let result = compute_tax(f64::NAN, &DEFAULT_RATES);

        assert!(result.taxable_base.is_nan());
        assert!(result.income_tax.is_nan());
    }

    #[test]
    fn test_infinite_income_gives_infinite_tax() {
        let result = compute_tax(f64::INFINITY, &DEFAULT_RATES);

        assert_eq!(result.taxable_base, f64::INFINITY);
        assert_eq!(result.income_tax, f64::INFINITY);
    }
}
