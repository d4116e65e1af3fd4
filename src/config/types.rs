//! Rate configuration types.
//!
//! This module contains the strongly-typed rate structures that the
//! conversion engine consumes and that are deserialized from YAML rate files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The reference rate configuration.
///
/// Pension and disability 18.8%, health insurance 7.5%, additional health
/// insurance 0.5%, unemployment insurance 1.2%, flat tax 10% and an
/// allowance of 10932.
pub const DEFAULT_RATES: RateConfiguration = RateConfiguration {
    contributions: ContributionRates {
        pension_and_disability: 0.188,
        health_insurance: 0.075,
        additional_health_insurance: 0.005,
        unemployment_insurance: 0.012,
    },
    tax: 0.1,
    allowance: 10932.0,
};

/// Employee contribution rates, each a decimal fraction of gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Pension and disability insurance.
    pub pension_and_disability: f64,
    /// Health insurance.
    pub health_insurance: f64,
    /// Additional health insurance.
    pub additional_health_insurance: f64,
    /// Unemployment insurance.
    pub unemployment_insurance: f64,
}

/// The complete set of rates a conversion is computed against.
///
/// The engine never validates a `RateConfiguration`. Negative rates, or a
/// combined contribution rate of 1 or more, yield degenerate breakdowns
/// (negative, infinite or NaN amounts) rather than errors. Callers that
/// accept rates from the outside should run [`RateConfiguration::validate`]
/// first.
///
/// # Example
///
/// ```
/// use salary_engine::config::RateConfiguration;
///
/// let rates = RateConfiguration::default();
/// assert_eq!(rates.tax, 0.1);
/// assert_eq!(rates.allowance, 10932.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfiguration {
    /// Employee contribution rates.
    pub contributions: ContributionRates,
    /// Flat income tax rate applied to the taxable base.
    pub tax: f64,
    /// Monthly amount exempt from income tax.
    pub allowance: f64,
}

impl Default for RateConfiguration {
    fn default() -> Self {
        DEFAULT_RATES
    }
}

impl RateConfiguration {
    /// Checks that the rates keep the inverse conversion well defined.
    ///
    /// Every rate and the allowance must be finite and non-negative, the
    /// combined contribution rate must stay below 1 and so must the tax rate.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::config::RateConfiguration;
    ///
    /// let mut rates = RateConfiguration::default();
    /// assert!(rates.validate().is_ok());
    ///
    /// rates.tax = 1.0;
    /// assert!(rates.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let c = &self.contributions;
        let fields = [
            ("contributions.pension_and_disability", c.pension_and_disability),
            ("contributions.health_insurance", c.health_insurance),
            (
                "contributions.additional_health_insurance",
                c.additional_health_insurance,
            ),
            ("contributions.unemployment_insurance", c.unemployment_insurance),
            ("tax", self.tax),
            ("allowance", self.allowance),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid_rate(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(invalid_rate(field, "must not be negative"));
            }
        }

        let combined = c.pension_and_disability
            + c.health_insurance
            + c.unemployment_insurance
            + c.additional_health_insurance;
        if combined >= 1.0 {
            return Err(invalid_rate(
                "contributions",
                format!("combined rate {} must be less than 1", combined),
            ));
        }

        if self.tax >= 1.0 {
            return Err(invalid_rate("tax", "must be less than 1"));
        }

        Ok(())
    }
}

fn invalid_rate(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidRate {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Descriptive metadata carried by a rate file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateMetadata {
    /// Human-readable name of the regime.
    pub name: String,
    /// Free-form version label.
    #[serde(default)]
    pub version: Option<String>,
}

impl Default for RateMetadata {
    fn default() -> Self {
        Self {
            name: "Built-in reference rates".to_string(),
            version: None,
        }
    }
}

/// Layout of a YAML rate file.
#[derive(Debug, Clone, Deserialize)]
pub struct RateFile {
    /// Optional metadata block.
    #[serde(default)]
    pub metadata: RateMetadata,
    /// The rates themselves, inlined at the top level of the file.
    #[serde(flatten)]
    pub rates: RateConfiguration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid_field(rates: RateConfiguration, expected_field: &str) {
        match rates.validate() {
            Err(EngineError::InvalidRate { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidRate for {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_default_rates_match_reference_values() {
        let rates = RateConfiguration::default();

        assert_eq!(rates.contributions.pension_and_disability, 0.188);
        assert_eq!(rates.contributions.health_insurance, 0.075);
        assert_eq!(rates.contributions.additional_health_insurance, 0.005);
        assert_eq!(rates.contributions.unemployment_insurance, 0.012);
        assert_eq!(rates.tax, 0.1);
        assert_eq!(rates.allowance, 10932.0);
    }

    #[test]
    fn test_default_rates_are_valid() {
        assert!(DEFAULT_RATES.validate().is_ok());
    }

    #[test]
    fn test_zero_rates_are_valid() {
        let rates = RateConfiguration {
            contributions: ContributionRates {
                pension_and_disability: 0.0,
                health_insurance: 0.0,
                additional_health_insurance: 0.0,
                unemployment_insurance: 0.0,
            },
            tax: 0.0,
            allowance: 0.0,
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_negative_contribution_rate_is_rejected() {
        let mut rates = DEFAULT_RATES;
        rates.contributions.health_insurance = -0.01;
        assert_invalid_field(rates, "contributions.health_insurance");
    }

    #[test]
    fn test_nan_tax_is_rejected() {
        let mut rates = DEFAULT_RATES;
        rates.tax = f64::NAN;
        assert_invalid_field(rates, "tax");
    }

    #[test]
    fn test_infinite_allowance_is_rejected() {
        let mut rates = DEFAULT_RATES;
        rates.allowance = f64::INFINITY;
        assert_invalid_field(rates, "allowance");
    }

    #[test]
    fn test_combined_contribution_rate_of_one_is_rejected() {
        let mut rates = DEFAULT_RATES;
        rates.contributions.pension_and_disability = 0.908;
        assert_invalid_field(rates, "contributions");
    }

    #[test]
    fn test_tax_rate_of_one_is_rejected() {
        let mut rates = DEFAULT_RATES;
        rates.tax = 1.0;
        assert_invalid_field(rates, "tax");
    }

    #[test]
    fn test_rate_file_without_metadata_uses_default() {
        let yaml = r#"
contributions:
  pension_and_disability: 0.14
  health_insurance: 0.05
  additional_health_insurance: 0.0
  unemployment_insurance: 0.0075
tax: 0.1
allowance: 25000
"#;
        let file: RateFile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(file.metadata, RateMetadata::default());
        assert_eq!(file.rates.contributions.pension_and_disability, 0.14);
        assert_eq!(file.rates.allowance, 25000.0);
    }

    #[test]
    fn test_rate_configuration_json_field_names() {
        let json = serde_json::to_value(DEFAULT_RATES).unwrap();

        assert_eq!(json["contributions"]["pension_and_disability"], 0.188);
        assert_eq!(json["contributions"]["unemployment_insurance"], 0.012);
        assert_eq!(json["tax"], 0.1);
        assert_eq!(json["allowance"], 10932.0);
    }
}
