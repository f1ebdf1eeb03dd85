//! Error types for model construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Model construction errors.
///
/// Raised eagerly at construction time; a simulation started with valid
/// parameters cannot fail for numerical reasons, so no runtime variants
/// exist.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::InvalidMaturity { maturity: -1.0 };
/// assert!(format!("{}", err).contains("maturity"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Spot price must be strictly positive.
    #[error("Invalid spot price: S = {spot} (must be > 0)")]
    InvalidSpot {
        /// The rejected spot value.
        spot: f64,
    },

    /// Risk-free rate must be non-negative.
    #[error("Invalid rate: r = {rate} (must be >= 0)")]
    InvalidRate {
        /// The rejected rate value.
        rate: f64,
    },

    /// Volatility must be non-negative.
    #[error("Invalid volatility: sigma = {volatility} (must be >= 0)")]
    InvalidVolatility {
        /// The rejected volatility value.
        volatility: f64,
    },

    /// Maturity must be strictly positive for simulation.
    #[error("Invalid maturity: T = {maturity} (must be > 0)")]
    InvalidMaturity {
        /// The rejected maturity value.
        maturity: f64,
    },

    /// Step count must be at least one.
    #[error("Invalid step count: {steps} (must be >= 1)")]
    InvalidStepCount {
        /// The rejected step count.
        steps: usize,
    },

    /// Jump intensity must be non-negative and finite.
    #[error("Invalid jump intensity: lambda = {intensity} (must be >= 0 and finite)")]
    InvalidJumpIntensity {
        /// The rejected intensity value.
        intensity: f64,
    },

    /// Jump-size volatility must be non-negative.
    #[error("Invalid jump volatility: delta = {jump_vol} (must be >= 0)")]
    InvalidJumpVolatility {
        /// The rejected jump volatility value.
        jump_vol: f64,
    },
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        PricingError::ModelFailure(err.to_string())
    }
}
