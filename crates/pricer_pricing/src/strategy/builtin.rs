//! Built-in pricing strategies.

use std::collections::BTreeMap;
use std::sync::Arc;

use pricer_models::analytical::BlackScholes;
use pricer_models::models::{JumpParameters, MertonJumpModel};
use tracing::debug;

use super::{Greek, PricingFn, PricingResult};
use crate::mc::{MonteCarloConfig, MonteCarloEstimator};

/// Registry key of the closed-form Black-Scholes strategy.
pub const BLACK_SCHOLES: &str = "black_scholes";

/// Registry key of the jump-diffusion Monte Carlo strategy.
pub const JUMP_MC: &str = "jump_mc";

/// Minimum Euler steps per simulated path.
const MIN_STEPS: usize = 10;

/// Step density for deriving the step count from the option maturity.
const STEPS_PER_YEAR: f64 = 12.0;

/// Configuration of the jump-diffusion Monte Carlo strategy.
///
/// Captured by the strategy function at registration time; per-request
/// inputs (spot, strike, maturity, ...) come from the option itself.
///
/// # Examples
/// ```rust
/// use pricer_pricing::strategy::JumpMcSettings;
///
/// let settings = JumpMcSettings {
///     paths: 50_000,
///     seed: Some(42),
///     ..JumpMcSettings::default()
/// };
/// assert_eq!(settings.paths, 50_000);
/// ```
#[derive(Debug, Clone)]
pub struct JumpMcSettings {
    /// Number of Monte Carlo paths per pricing request.
    pub paths: usize,
    /// Jump process parameters applied to every request.
    pub jump_params: JumpParameters,
    /// Optional seed; unseeded settings price with seed 0.
    pub seed: Option<u64>,
    /// Partition paths across Rayon workers instead of a single thread.
    pub parallel: bool,
}

impl Default for JumpMcSettings {
    fn default() -> Self {
        Self {
            paths: 200,
            jump_params: JumpParameters::default(),
            seed: None,
            parallel: false,
        }
    }
}

/// Derives the Euler step count from maturity: monthly steps with a
/// floor of [`MIN_STEPS`].
#[inline]
fn simulation_steps(maturity: f64) -> usize {
    ((maturity * STEPS_PER_YEAR) as usize).max(MIN_STEPS)
}

/// Closed-form Black-Scholes strategy.
///
/// Prices the option analytically and fills the full Greeks map. For
/// degenerate inputs (zero maturity or volatility) the result is the
/// intrinsic value with boundary delta and zero remaining Greeks.
pub fn black_scholes_pricer() -> PricingFn {
    Arc::new(|option| {
        let model = BlackScholes::new(
            option.spot(),
            option.rate(),
            option.dividend(),
            option.volatility(),
        )?;

        let strike = option.strike();
        let expiry = option.maturity();
        let kind = option.kind();

        let mut greeks = BTreeMap::new();
        greeks.insert(Greek::Delta, model.delta(strike, expiry, kind));
        greeks.insert(Greek::Gamma, model.gamma(strike, expiry));
        greeks.insert(Greek::Vega, model.vega(strike, expiry));
        greeks.insert(Greek::Theta, model.theta(strike, expiry, kind));
        greeks.insert(Greek::Rho, model.rho(strike, expiry, kind));

        Ok(PricingResult {
            price: model.price(strike, expiry, kind),
            greeks,
        })
    })
}

/// Merton jump-diffusion Monte Carlo strategy.
///
/// Builds a fresh model per pricing request from the option and the
/// captured settings, then drives a payoff sequence of the configured
/// path count through the estimator. The Greeks map is left empty; the
/// closed-form strategy is the source of analytical sensitivities.
pub fn jump_mc_pricer(settings: JumpMcSettings) -> PricingFn {
    Arc::new(move |option| {
        let steps = simulation_steps(option.maturity());
        debug!(
            paths = settings.paths,
            steps,
            parallel = settings.parallel,
            "dispatching jump-diffusion Monte Carlo pricing"
        );

        let model = MertonJumpModel::new(
            option.spot(),
            option.rate(),
            option.volatility(),
            settings.jump_params,
            option.maturity(),
            steps,
        )?;

        let mut builder = MonteCarloConfig::builder().n_paths(settings.paths);
        if let Some(seed) = settings.seed {
            builder = builder.seed(seed);
        }
        let estimator = MonteCarloEstimator::new(builder.build()?)?;

        let estimate = if settings.parallel {
            estimator.price_parallel(&model, option.strike(), option.kind())?
        } else {
            estimator.price(&model, option.strike(), option.kind())?
        };

        Ok(PricingResult::price_only(estimate.price))
    })
}
