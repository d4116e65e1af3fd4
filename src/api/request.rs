//! Request types for the salary engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::RateConfiguration;
use crate::error::EngineResult;
use crate::models::{SalaryInput, SalaryKind};

/// Request body for the `/calculate` endpoint.
///
/// ```text
/// {"kind": "net", "amount": 43213.2, "rates": { ... }}
/// ```
///
/// `rates` is optional; without it the server's configured rates are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Whether `amount` is a gross or a net salary.
    pub kind: SalaryKind,
    /// The salary amount.
    pub amount: f64,
    /// Optional rates overriding the server configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateConfiguration>,
}

impl CalculationRequest {
    /// Returns the tagged input after checking the amount.
    pub fn input(&self) -> EngineResult<SalaryInput> {
        let input = SalaryInput::new(self.kind, self.amount);
        input.validate()?;
        Ok(input)
    }

    /// Returns the override rates after validating them, falling back to `default`.
    pub fn rates_or(&self, default: &RateConfiguration) -> EngineResult<RateConfiguration> {
        match self.rates {
            Some(rates) => {
                rates.validate()?;
                Ok(rates)
            }
            None => Ok(*default),
        }
    }
}
