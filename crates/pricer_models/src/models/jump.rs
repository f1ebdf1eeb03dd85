//! Poisson jump process parameters.

use super::error::ModelError;

/// Parameters of the compound Poisson jump component.
///
/// Holds the jump arrival intensity and the distribution of log-jump
/// sizes. Immutable once constructed; equality is value equality.
///
/// # Examples
/// ```
/// use pricer_models::models::JumpParameters;
///
/// let params = JumpParameters::new(0.75, -0.6, 0.25).unwrap();
/// assert_eq!(params.intensity(), 0.75);
///
/// // Negative mean jumps pull the risk-neutral drift correction negative
/// assert!(params.drift_correction() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpParameters {
    /// Expected number of jumps per unit time (lambda).
    intensity: f64,
    /// Mean of the log jump size (mu_j).
    mean_jump: f64,
    /// Standard deviation of the log jump size (delta).
    jump_vol: f64,
}

impl Default for JumpParameters {
    /// Equity crash-risk preset: frequent, strongly negative jumps
    /// (`lambda = 0.75`, `mu_j = -0.6`, `delta = 0.25`).
    fn default() -> Self {
        Self {
            intensity: 0.75,
            mean_jump: -0.6,
            jump_vol: 0.25,
        }
    }
}

impl JumpParameters {
    /// Creates validated jump parameters.
    ///
    /// # Arguments
    /// * `intensity` - Jump intensity lambda (must be >= 0 and finite)
    /// * `mean_jump` - Mean log jump size mu_j (any finite value)
    /// * `jump_vol` - Log jump size standard deviation delta (must be >= 0)
    ///
    /// # Errors
    /// - [`ModelError::InvalidJumpIntensity`] if `intensity` is negative or
    ///   not finite
    /// - [`ModelError::InvalidJumpVolatility`] if `jump_vol` is negative
    pub fn new(intensity: f64, mean_jump: f64, jump_vol: f64) -> Result<Self, ModelError> {
        if !(intensity >= 0.0) || !intensity.is_finite() {
            return Err(ModelError::InvalidJumpIntensity { intensity });
        }
        if !(jump_vol >= 0.0) {
            return Err(ModelError::InvalidJumpVolatility { jump_vol });
        }

        Ok(Self {
            intensity,
            mean_jump,
            jump_vol,
        })
    }

    /// Creates the no-jump parameter set (`lambda = 0`).
    ///
    /// With zero intensity the jump-diffusion collapses to plain geometric
    /// Brownian motion, which is the basis of the closed-form cross-check.
    #[inline]
    pub fn none() -> Self {
        Self {
            intensity: 0.0,
            mean_jump: 0.0,
            jump_vol: 0.0,
        }
    }

    /// Returns the jump intensity (lambda).
    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Returns the mean log jump size (mu_j).
    #[inline]
    pub fn mean_jump(&self) -> f64 {
        self.mean_jump
    }

    /// Returns the log jump size standard deviation (delta).
    #[inline]
    pub fn jump_vol(&self) -> f64 {
        self.jump_vol
    }

    /// Risk-neutral drift correction for the jump component.
    ///
    /// `r_j = lambda * (e^(mu_j + delta^2 / 2) - 1)`
    ///
    /// Subtracting this compensator from the risk-free drift keeps the
    /// discounted price process a martingale under the pricing measure.
    #[inline]
    pub fn drift_correction(&self) -> f64 {
        self.intensity * ((self.mean_jump + 0.5 * self.jump_vol * self.jump_vol).exp() - 1.0)
    }
}
