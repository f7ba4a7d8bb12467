//! Error types for the Compensation Status Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during status computation.

use thiserror::Error;

/// The main error type for the Compensation Status Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Cache unavailability deliberately has no variant here: the cache layer
/// absorbs its own failures by degrading to a no-op.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     national_key: "ZZZ9999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: ZZZ9999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request carried a malformed national key or malformed salary data.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of what made the input invalid.
        message: String,
    },

    /// No employee record exists for the given national key.
    #[error("Employee not found: {national_key}")]
    NotFound {
        /// The national key that was not found.
        national_key: String,
    },

    /// The employee record exists but has been deactivated.
    #[error("Employee '{national_key}' is inactive")]
    Inactive {
        /// The national key of the inactive employee.
        national_key: String,
    },

    /// The employee has fewer salary records than the required minimum.
    #[error("Insufficient salary history: found {found} records, need at least {required}")]
    InsufficientData {
        /// The number of salary records found.
        found: usize,
        /// The minimum number of salary records required.
        required: usize,
    },

    /// The record store failed after exhausting all retry attempts.
    #[error("Data access failure: {message}")]
    DataAccessFailure {
        /// A description of the underlying data-access error.
        message: String,
    },

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
}

impl EngineError {
    /// Returns true if the error is caller-correctable (a client error),
    /// as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput { .. }
                | EngineError::NotFound { .. }
                | EngineError::Inactive { .. }
                | EngineError::InsufficientData { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
