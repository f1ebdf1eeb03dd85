//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//!
//! Layer-specific errors (model construction, estimator configuration,
//! registry lookup) are defined next to the code that raises them and
//! convert into `PricingError` at the dispatch boundary.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. All layer errors convert
/// into this type at the strategy-dispatch boundary, so callers see a
/// single taxonomy.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `ModelFailure`: Model construction or simulation setup failed
/// - `NumericalInstability`: Computation encountered numerical issues
/// - `Cancelled`: A simulation was aborted before completion
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model failed to produce a valid result.
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Simulation was cancelled before completion.
    #[error("Pricing cancelled after {completed} paths")]
    Cancelled {
        /// Number of paths completed before the abort signal fired.
        completed: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("spot must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: spot must be positive");
    }

    #[test]
    fn test_cancelled_display() {
        let err = PricingError::Cancelled { completed: 42 };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::ModelFailure("bad state".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::NumericalInstability("overflow".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
