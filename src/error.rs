//! Error types for algoviz engines
//!
//! A malformed input is a caller contract violation: the engine fails
//! fast with [`AlgovizError::InvalidInput`] and produces no partial
//! trace. A failed precondition is reported once and never retried.
//! Unreachable destinations and degenerate-but-valid inputs are normal
//! outcomes, not errors.

use thiserror::Error;

/// Errors that can occur while running an engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgovizError {
    /// The supplied structure or arguments cannot be run
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl AlgovizError {
    /// Create an error for a malformed or unusable input
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AlgovizError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an error for a position or identifier outside the structure
    pub fn out_of_bounds(context: &str, value: impl std::fmt::Display) -> Self {
        AlgovizError::InvalidInput {
            reason: format!("{} out of bounds: {}", context, value),
        }
    }

    /// Create an error for an empty structure where at least one element is required
    pub fn empty_input(context: &str) -> Self {
        AlgovizError::InvalidInput {
            reason: format!("empty {}: at least one element is required", context),
        }
    }
}

/// Result type alias for algoviz operations
pub type Result<T> = std::result::Result<T, AlgovizError>;
