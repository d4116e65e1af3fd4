//! Rate configuration for the salary engine.
//!
//! Rates are plain values passed explicitly to every conversion. They can be
//! built in code, taken from [`DEFAULT_RATES`], or loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rates.yaml").unwrap();
//! println!("Flat tax rate: {}", config.rates().tax);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ContributionRates, DEFAULT_RATES, RateConfiguration, RateFile, RateMetadata};
