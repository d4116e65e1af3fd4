//! Salary breakdown models.
//!
//! This module contains the [`SalaryBreakdown`] type and its component
//! breakdowns. Every value is derived by the conversion engine; none of them
//! is meant to be assembled by hand.

use serde::{Deserialize, Serialize};

/// The four employee contribution amounts and their sum.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_contributions;
/// use salary_engine::config::RateConfiguration;
///
/// let contributions = compute_contributions(65000.0, &RateConfiguration::default());
/// assert_eq!(contributions.pension_and_disability, 12220.0);
/// assert_eq!(contributions.total, 18200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionsBreakdown {
    /// Pension and disability insurance amount.
    pub pension_and_disability: f64,
    /// Health insurance amount.
    pub health_insurance: f64,
    /// Additional health insurance amount.
    pub additional_health_insurance: f64,
    /// Unemployment insurance amount.
    pub unemployment_insurance: f64,
    /// Sum of the four contribution amounts.
    pub total: f64,
}

/// Taxable base and the income tax levied on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Income after contributions minus the allowance, floored at zero.
    pub taxable_base: f64,
    /// Flat tax applied to the taxable base.
    pub income_tax: f64,
}

/// The full result of a gross/net conversion.
///
/// `net == gross - contributions.total - tax.income_tax` holds exactly for
/// breakdowns produced from a gross amount, and to floating-point tolerance
/// for those produced from a net amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Salary before contributions and income tax.
    pub gross: f64,
    /// Salary after contributions and income tax.
    pub net: f64,
    /// Itemized contributions.
    pub contributions: ContributionsBreakdown,
    /// Taxable base and income tax.
    pub tax: TaxBreakdown,
}

impl SalaryBreakdown {
    /// Gross salary minus total contributions.
    pub fn gross_after_contributions(&self) -> f64 {
        self.gross - self.contributions.total
    }

    /// Total amount withheld from gross: contributions plus income tax.
    pub fn total_deductions(&self) -> f64 {
        self.contributions.total + self.tax.income_tax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_breakdown() -> SalaryBreakdown {
        SalaryBreakdown {
            gross: 65000.0,
            net: 43213.2,
            contributions: ContributionsBreakdown {
                pension_and_disability: 12220.0,
                health_insurance: 4875.0,
                additional_health_insurance: 325.0,
                unemployment_insurance: 780.0,
                total: 18200.0,
            },
            tax: TaxBreakdown {
                taxable_base: 35868.0,
                income_tax: 3586.8,
            },
        }
    }

    #[test]
    fn test_gross_after_contributions() {
        assert_eq!(sample_breakdown().gross_after_contributions(), 46800.0);
    }

    #[test]
    fn test_total_deductions() {
        let breakdown = sample_breakdown();
        assert!((breakdown.total_deductions() - 21786.8).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_serialization_uses_snake_case() {
        let json = serde_json::to_value(sample_breakdown()).unwrap();

        assert_eq!(json["gross"], 65000.0);
        assert_eq!(json["contributions"]["pension_and_disability"], 12220.0);
        assert_eq!(json["contributions"]["additional_health_insurance"], 325.0);
        assert_eq!(json["tax"]["taxable_base"], 35868.0);
        assert_eq!(json["tax"]["income_tax"], 3586.8);
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = serde_json::to_string(&sample_breakdown()).unwrap();
        let breakdown: SalaryBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, sample_breakdown());
    }
}
