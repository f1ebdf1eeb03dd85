//! Error types for the Monte Carlo pricing kernel.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration errors for the Monte Carlo estimator.
///
/// These occur during construction when invalid parameters are provided,
/// never inside the simulation loop.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside the valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Runtime errors from the Monte Carlo estimator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EstimatorError {
    /// The run was aborted through a [`CancelToken`](super::CancelToken)
    /// before all requested paths completed.
    #[error("Simulation cancelled after {completed} paths")]
    Cancelled {
        /// Number of paths completed before the abort signal fired.
        completed: usize,
    },
}

impl From<EstimatorError> for PricingError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::Cancelled { completed } => PricingError::Cancelled { completed },
        }
    }
}
