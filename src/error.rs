//! Error types for the salary engine.
//!
//! The conversion functions in [`crate::calculation`] are total and never
//! return these errors. They are raised at the edges of the crate: loading a
//! rate file, validating caller-supplied rates or amounts, and serving HTTP.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate or the allowance is outside the range the inverse conversion can handle.
    #[error("Invalid rate '{field}': {message}")]
    InvalidRate {
        /// The offending rate field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A salary amount was rejected at the boundary.
    #[error("Invalid amount: {message}")]
    InvalidAmount {
        /// Why the amount was rejected.
        message: String,
    },

    /// The HTTP server could not be started or stopped unexpectedly.
    #[error("Server error: {message}")]
    ServerError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
