//! Error types for loan operations.

use thiserror::Error;

/// A specialized Result type for loan operations.
pub type LoanResult<T> = Result<T, LoanError>;

/// Errors that can occur during loan operations.
#[derive(Error, Debug, Clone)]
pub enum LoanError {
    /// Invalid term parameter passed to a schedule calculation.
    #[error("Invalid term: {reason}")]
    InvalidTerm {
        /// Description of what's invalid.
        reason: String,
    },

    /// Invalid market price.
    #[error("Invalid price: {value} - must be positive and finite")]
    InvalidPrice {
        /// The invalid price value, as percent of par.
        value: f64,
    },

    /// The cash-flow series does not determine a unique yield.
    ///
    /// The discounted cash-flow polynomial has zero or several positive
    /// real roots, so no single internal rate exists for the given flow
    /// shape. Root-finding is deterministic; this is never retried.
    #[error("Ambiguous yield: {candidates} positive real discount factors, expected exactly 1")]
    AmbiguousYield {
        /// Number of qualifying roots found.
        candidates: usize,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] realkredit_core::CoreError),

    /// Math library error.
    #[error("Math error: {0}")]
    MathError(#[from] realkredit_math::MathError),
}

impl LoanError {
    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(reason: impl Into<String>) -> Self {
        Self::InvalidTerm {
            reason: reason.into(),
        }
    }
}
