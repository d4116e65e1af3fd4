//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{RateConfiguration, RateFile, RateMetadata};

/// Loads and provides access to a rate configuration.
///
/// A rate file is a single YAML document:
/// ```text
/// metadata:
///   name: "Reference flat-tax regime"
///   version: "reference"
/// contributions:
///   pension_and_disability: 0.188
///   health_insurance: 0.075
///   additional_health_insurance: 0.005
///   unemployment_insurance: 0.012
/// tax: 0.1
/// allowance: 10932
/// ```
///
/// Rates are validated once they are parsed, so a loaded configuration is
/// always safe to hand to the inverse conversion.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rates.yaml")?;
/// println!("Loaded rates: {}", loader.metadata().name);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: RateMetadata,
    rates: RateConfiguration,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_rates(RateMetadata::default(), RateConfiguration::default())
    }
}

impl ConfigLoader {
    /// Loads a rate configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or is missing a field (`ConfigParseError`)
    /// - The rates fail validation (`InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: RateFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        file.rates.validate()?;

        debug!(
            path = %path_str,
            name = %file.metadata.name,
            tax = file.rates.tax,
            allowance = file.rates.allowance,
            "Loaded rate configuration"
        );

        Ok(Self::from_rates(file.metadata, file.rates))
    }

    /// Wraps an already constructed rate configuration.
    pub fn from_rates(metadata: RateMetadata, rates: RateConfiguration) -> Self {
        Self { metadata, rates }
    }

    /// Returns the loaded rates.
    pub fn rates(&self) -> &RateConfiguration {
        &self.rates
    }

    /// Returns the rate file metadata.
    pub fn metadata(&self) -> &RateMetadata {
        &self.metadata
    }
}
