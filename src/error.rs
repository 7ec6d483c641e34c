//! Error types for the timeclock engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The timesheet computation itself never fails: malformed punch sequences
//! degrade to partial results instead of raising. Errors exist only for the
//! concerns around the engine, settings loading in particular.

use thiserror::Error;

/// The main error type for the timeclock engine.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A settings value was outside its valid range.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSettings {
        /// The settings field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
