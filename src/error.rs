//! Error types for the rotation-compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors occur only on the configuration-loading path; rule evaluation
//! itself is total and reports problems through check statuses instead.

use thiserror::Error;

/// The main error type for the rotation-compliance engine.
///
/// # Example
///
/// ```
/// use turnus_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// Tariff agreement identifier was not found in the catalog.
    #[error("Tariff agreement not found: {tariff_id}")]
    TariffNotFound {
        /// The tariff identifier that was not found.
        tariff_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
