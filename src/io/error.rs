//! Error types for board generation and its command-line surface
//!
//! Tile bookkeeping itself never fails: collection and board operations report
//! misuse through `bool` and `Option` results. Errors here cover parameter
//! validation, output, and logging setup.

use std::fmt;

/// Main error type for generation runs
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Writing the rendered board failed
    Output {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Names the operation an I/O failure happened in
pub trait WithOperation<T> {
    /// Wrap an I/O error as an output error for `operation`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| GenerationError::Output { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a logging setup error
pub fn logging_error(reason: &impl ToString) -> GenerationError {
    GenerationError::Logging {
        reason: reason.to_string(),
    }
}
