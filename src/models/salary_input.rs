//! The tagged salary amount a conversion starts from.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which side of the conversion an amount is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryKind {
    /// Salary before deductions.
    Gross,
    /// Salary after deductions.
    Net,
}

/// A salary amount tagged with its direction.
///
/// Serialized as `{"kind": "gross", "amount": 65000.0}`.
///
/// # Example
///
/// ```
/// use salary_engine::models::{SalaryInput, SalaryKind};
///
/// let input = SalaryInput::new(SalaryKind::Net, 43213.2);
/// assert_eq!(input, SalaryInput::Net(43213.2));
/// assert_eq!(input.amount(), 43213.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum SalaryInput {
    /// A gross amount, converted to net.
    Gross(f64),
    /// A net amount, converted to gross.
    Net(f64),
}

impl SalaryInput {
    /// Builds an input from a kind and an amount.
    pub fn new(kind: SalaryKind, amount: f64) -> Self {
        match kind {
            SalaryKind::Gross => SalaryInput::Gross(amount),
            SalaryKind::Net => SalaryInput::Net(amount),
        }
    }

    /// Returns the direction of this input.
    pub fn kind(&self) -> SalaryKind {
        match self {
            SalaryInput::Gross(_) => SalaryKind::Gross,
            SalaryInput::Net(_) => SalaryKind::Net,
        }
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        match *self {
            SalaryInput::Gross(amount) | SalaryInput::Net(amount) => amount,
        }
    }

    /// Rejects amounts that are not finite or are negative.
    ///
    /// The conversion engine accepts any amount; this check is for callers
    /// that take amounts from users.
    pub fn validate(&self) -> EngineResult<()> {
        let amount = self.amount();
        if !amount.is_finite() {
            return Err(EngineError::InvalidAmount {
                message: format!("amount must be a finite number, got {}", amount),
            });
        }
        if amount < 0.0 {
            return Err(EngineError::InvalidAmount {
                message: format!("amount must not be negative, got {}", amount),
            });
        }
        Ok(())
    }
}
