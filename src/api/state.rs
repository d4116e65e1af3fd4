//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateConfiguration};

/// Shared application state.
///
/// Holds the rate configuration the server was started with. It is never
/// mutated after start-up, so handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the server's default rates.
    pub fn rates(&self) -> &RateConfiguration {
        self.config.rates()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
