//! Error types for the Realkredit library.
//!
//! This module defines the error types used by the core crate,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Invalid loan principal (non-positive or non-finite).
    #[error("Invalid principal: {value} - must be positive and finite")]
    InvalidPrincipal {
        /// The invalid principal value.
        value: f64,
    },

    /// Invalid interest rate (negative or non-finite).
    #[error("Invalid rate: {value} - must be non-negative and finite")]
    InvalidRate {
        /// The invalid rate value.
        value: f64,
    },

    /// Invalid loan term specification.
    #[error("Invalid term: {reason}")]
    InvalidTerm {
        /// Description of what's invalid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(reason: impl Into<String>) -> Self {
        Self::InvalidTerm {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_term("maturity must be at least 1 year");
        assert!(err.to_string().contains("Invalid term"));
    }

    #[test]
    fn test_invalid_principal_display() {
        let err = CoreError::InvalidPrincipal { value: -100.0 };
        assert!(err.to_string().contains("-100"));
    }
}
