//! Error type for calculations.

use thiserror::Error;

/// Errors raised while evaluating a pending operation.
///
/// The session collapses every variant into the `"Error"` display sentinel,
/// so callers never need to tell them apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The expression could not be evaluated or produced a non-finite value.
    #[error("Invalid calculation: {expression}")]
    InvalidCalculation { expression: String },
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    pub fn invalid(expression: impl Into<String>) -> Self {
        Self::InvalidCalculation {
            expression: expression.into(),
        }
    }
}
