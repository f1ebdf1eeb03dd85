//! Merton jump-diffusion model with Euler-discretised path stepping.
//!
//! The model follows the SDE
//!
//! ```text
//! dS_t = (r - r_j) S_t dt + sigma S_t dZ_t + J_t S_t dN_t
//! ```
//!
//! where `r_j` is the risk-neutral jump compensator, `Z_t` Brownian motion,
//! `N_t` a Poisson process with intensity lambda, and `J_t` lognormal jump
//! amplitudes. Each Euler step updates the price in log space:
//!
//! ```text
//! S_t = S_{t-dt} * exp((r - r_j - sigma^2/2) dt + sigma sqrt(dt) z + sum_j Y_j)
//! ```
//!
//! with `z` standard normal and `Y_j ~ Normal(mu_j, delta)` one draw per
//! jump event in the step. The update is a product of exponentials, so a
//! simulated price stays strictly positive at every step.

use rand::Rng;
use rand_distr::{Distribution, Poisson, StandardNormal};
use tracing::debug;

use super::error::ModelError;
use super::jump::JumpParameters;

/// Euler-discretised Merton jump-diffusion simulator.
///
/// Holds validated market and contract parameters plus two quantities
/// derived once at construction: the step size `delta_t = maturity / steps`
/// and the risk-neutral jump drift correction. The model is immutable after
/// construction; every simulated path starts fresh from `spot` and mutates
/// only a local working value.
///
/// Randomness is threaded in explicitly, so the same seed reproduces the
/// same path and the model itself is freely shareable across threads.
///
/// # Examples
/// ```
/// use pricer_models::models::{JumpParameters, MertonJumpModel};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let jumps = JumpParameters::new(0.75, -0.6, 0.25).unwrap();
/// let model = MertonJumpModel::new(100.0, 0.05, 0.2, jumps, 1.0, 252).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let terminal = model.simulate_terminal_price(&mut rng);
/// assert!(terminal > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MertonJumpModel {
    spot: f64,
    rate: f64,
    volatility: f64,
    jump_params: JumpParameters,
    maturity: f64,
    steps: usize,
    /// Step size, cached at construction.
    delta_t: f64,
    /// Risk-neutral jump compensator, cached at construction.
    drift_correction: f64,
    /// Per-step jump count distribution; `None` when intensity is zero.
    jump_arrivals: Option<Poisson<f64>>,
}

impl MertonJumpModel {
    /// Creates a validated model.
    ///
    /// All validation happens here; a constructed model cannot fail during
    /// simulation.
    ///
    /// # Arguments
    /// * `spot` - Initial asset price S0 (must be > 0)
    /// * `rate` - Risk-free rate r (must be >= 0)
    /// * `volatility` - Diffusion volatility sigma (must be >= 0)
    /// * `jump_params` - Jump process parameters
    /// * `maturity` - Time horizon T in years (must be > 0)
    /// * `steps` - Number of Euler steps per path (must be >= 1)
    ///
    /// # Errors
    /// Returns [`ModelError`] naming the offending parameter.
    pub fn new(
        spot: f64,
        rate: f64,
        volatility: f64,
        jump_params: JumpParameters,
        maturity: f64,
        steps: usize,
    ) -> Result<Self, ModelError> {
        if !(spot > 0.0) || !spot.is_finite() {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !(rate >= 0.0) || !rate.is_finite() {
            return Err(ModelError::InvalidRate { rate });
        }
        if !(volatility >= 0.0) || !volatility.is_finite() {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        if !(maturity > 0.0) || !maturity.is_finite() {
            return Err(ModelError::InvalidMaturity { maturity });
        }
        if steps == 0 {
            return Err(ModelError::InvalidStepCount { steps });
        }

        let delta_t = maturity / steps as f64;
        let drift_correction = jump_params.drift_correction();

        let jump_arrivals = if jump_params.intensity() > 0.0 {
            let arrival_rate = jump_params.intensity() * delta_t;
            Some(
                Poisson::new(arrival_rate).map_err(|_| ModelError::InvalidJumpIntensity {
                    intensity: jump_params.intensity(),
                })?,
            )
        } else {
            None
        };

        debug!(
            spot,
            rate,
            volatility,
            maturity,
            steps,
            delta_t,
            drift_correction,
            "Merton jump model constructed"
        );

        Ok(Self {
            spot,
            rate,
            volatility,
            jump_params,
            maturity,
            steps,
            delta_t,
            drift_correction,
            jump_arrivals,
        })
    }

    /// Returns the initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the diffusion volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the jump parameters.
    #[inline]
    pub fn jump_params(&self) -> JumpParameters {
        self.jump_params
    }

    /// Returns the time horizon in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the number of Euler steps per path.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Returns the step size `maturity / steps`.
    #[inline]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Returns the cached risk-neutral jump drift correction.
    #[inline]
    pub fn drift_correction(&self) -> f64 {
        self.drift_correction
    }

    /// Simulates one terminal price at maturity.
    ///
    /// Iterates `steps` Euler updates from `spot`, drawing per step one
    /// standard normal diffusion variate, one Poisson jump count, and one
    /// `Normal(mu_j, delta)` log-jump size per jump event. The per-path
    /// random cost is therefore bounded by the number of jumps actually
    /// sampled.
    ///
    /// The returned price is strictly positive for every valid model.
    pub fn simulate_terminal_price<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let drift_dt =
            (self.rate - self.drift_correction - 0.5 * self.volatility * self.volatility)
                * self.delta_t;
        let vol_sqrt_dt = self.volatility * self.delta_t.sqrt();

        let mean_jump = self.jump_params.mean_jump();
        let jump_vol = self.jump_params.jump_vol();

        let mut price = self.spot;
        for _ in 0..self.steps {
            let z: f64 = StandardNormal.sample(rng);

            let jump_count = match &self.jump_arrivals {
                Some(arrivals) => arrivals.sample(rng) as u64,
                None => 0,
            };

            let mut jump_sum = 0.0;
            for _ in 0..jump_count {
                let z_jump: f64 = StandardNormal.sample(rng);
                jump_sum += mean_jump + jump_vol * z_jump;
            }

            price *= (drift_dt + vol_sqrt_dt * z + jump_sum).exp();
        }
        price
    }
}
