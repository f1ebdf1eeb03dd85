//! Discounted Monte Carlo price estimation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pricer_core::types::OptionKind;
use pricer_models::models::MertonJumpModel;
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::MonteCarloConfig;
use super::error::{ConfigError, EstimatorError};
use super::sequence::PayoffSequence;
use crate::rng::PricerRng;

/// Paths simulated per parallel worker task.
const PARALLEL_CHUNK: usize = 4096;

/// Progress logging cadence for sequential draining.
const LOG_EVERY: usize = 1000;

/// Cooperative cancellation flag for time-boxed pricing.
///
/// Cloning shares the underlying flag, so a caller can hand a clone to the
/// estimator and trigger the abort from another thread.
///
/// # Examples
/// ```rust
/// use pricer_pricing::mc::CancelToken;
///
/// let token = CancelToken::new();
/// let shared = token.clone();
/// shared.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals every holder of this token to stop.
    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Monte Carlo price estimate.
///
/// `paths_used` equals the requested path count for a completed run and
/// the number of completed paths for an interim estimate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of paths the estimate is based on.
    pub paths_used: usize,
}

impl McEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Discounting Monte Carlo estimator.
///
/// Fully drains a lazy payoff sequence, averages, and discounts at the
/// model's risk-free rate over its maturity:
///
/// ```text
/// price = exp(-r * T) * (sum of payoffs) / N
/// ```
///
/// No variance reduction is applied; the standard error scales as
/// `O(1/sqrt(N))` and the configured path count is the cost/precision
/// knob.
///
/// # Examples
/// ```rust
/// use pricer_core::types::OptionKind;
/// use pricer_models::models::{JumpParameters, MertonJumpModel};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEstimator};
///
/// let jumps = JumpParameters::new(0.1, -0.2, 0.1).unwrap();
/// let model = MertonJumpModel::new(100.0, 0.05, 0.2, jumps, 1.0, 12).unwrap();
///
/// let config = MonteCarloConfig::builder().n_paths(10_000).seed(42).build().unwrap();
/// let estimator = MonteCarloEstimator::new(config).unwrap();
///
/// let estimate = estimator.price(&model, 100.0, OptionKind::Call).unwrap();
/// assert!(estimate.price > 0.0);
/// ```
pub struct MonteCarloEstimator {
    config: MonteCarloConfig,
    cancel: CancelToken,
}

impl MonteCarloEstimator {
    /// Creates a new estimator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid (notably a
    /// zero path count).
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancelToken::new(),
        })
    }

    /// Attaches a cancellation token checked once per simulated path.
    #[inline]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices an option sequentially, draining the full payoff sequence.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::Cancelled`] if the cancellation token
    /// fires before all paths complete; no partial price is returned from
    /// this method.
    pub fn price(
        &self,
        model: &MertonJumpModel,
        strike: f64,
        kind: OptionKind,
    ) -> Result<McEstimate, EstimatorError> {
        let n_paths = self.config.n_paths();
        let (sum, sum_sq, completed) = self.drain_sequential(model, strike, kind);

        if completed < n_paths {
            return Err(EstimatorError::Cancelled { completed });
        }

        let estimate = finalise(sum, sum_sq, completed, discount_factor(model));
        info!(
            price = estimate.price,
            std_error = estimate.std_error,
            paths = completed,
            "Monte Carlo pricing completed"
        );
        Ok(estimate)
    }

    /// Prices an option sequentially, returning the mean over the paths
    /// completed so far when cancelled.
    ///
    /// This is the explicit opt-in for partial results; [`price`](Self::price)
    /// never returns one.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::Cancelled`] only when cancellation fires
    /// before a single path completes, since no mean exists yet.
    pub fn interim_price(
        &self,
        model: &MertonJumpModel,
        strike: f64,
        kind: OptionKind,
    ) -> Result<McEstimate, EstimatorError> {
        let (sum, sum_sq, completed) = self.drain_sequential(model, strike, kind);

        if completed == 0 {
            return Err(EstimatorError::Cancelled { completed: 0 });
        }
        if completed < self.config.n_paths() {
            debug!(
                completed,
                requested = self.config.n_paths(),
                "returning interim estimate after cancellation"
            );
        }

        Ok(finalise(sum, sum_sq, completed, discount_factor(model)))
    }

    /// Prices an option by partitioning the path count across Rayon
    /// workers.
    ///
    /// Each chunk owns an independently-seeded random stream derived from
    /// the base seed, so no generator is shared between threads and the
    /// result is reproducible for a given seed and chunk layout. Path
    /// ordering is irrelevant: only the partial sums are combined.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::Cancelled`] if the cancellation token
    /// fires before all paths complete.
    pub fn price_parallel(
        &self,
        model: &MertonJumpModel,
        strike: f64,
        kind: OptionKind,
    ) -> Result<McEstimate, EstimatorError> {
        let n_paths = self.config.n_paths();
        let seed = self.config.seed().unwrap_or(0);
        let n_chunks = (n_paths + PARALLEL_CHUNK - 1) / PARALLEL_CHUNK;

        let (sum, sum_sq, completed) = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * PARALLEL_CHUNK;
                let count = PARALLEL_CHUNK.min(n_paths - start);
                let rng = PricerRng::split_stream(seed, chunk as u64);
                let mut payoffs = PayoffSequence::new(model, count, rng, strike, kind);

                let mut sum = 0.0;
                let mut sum_sq = 0.0;
                let mut completed = 0usize;
                while !self.cancel.is_cancelled() {
                    match payoffs.next() {
                        Some(payoff) => {
                            sum += payoff;
                            sum_sq += payoff * payoff;
                            completed += 1;
                        }
                        None => break,
                    }
                }
                (sum, sum_sq, completed)
            })
            .reduce(
                || (0.0, 0.0, 0),
                |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
            );

        if completed < n_paths {
            return Err(EstimatorError::Cancelled { completed });
        }

        let estimate = finalise(sum, sum_sq, completed, discount_factor(model));
        info!(
            price = estimate.price,
            std_error = estimate.std_error,
            paths = completed,
            workers = n_chunks,
            "parallel Monte Carlo pricing completed"
        );
        Ok(estimate)
    }

    /// Drains the payoff sequence until completion or cancellation,
    /// returning the running sums and the completed path count.
    fn drain_sequential(
        &self,
        model: &MertonJumpModel,
        strike: f64,
        kind: OptionKind,
    ) -> (f64, f64, usize) {
        let n_paths = self.config.n_paths();
        let seed = self.config.seed().unwrap_or(0);
        let mut payoffs =
            PayoffSequence::new(model, n_paths, PricerRng::from_seed(seed), strike, kind);

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut completed = 0usize;

        while !self.cancel.is_cancelled() {
            match payoffs.next() {
                Some(payoff) => {
                    sum += payoff;
                    sum_sq += payoff * payoff;
                    completed += 1;
                    if completed % LOG_EVERY == 0 {
                        debug!(completed, requested = n_paths, "generated paths");
                    }
                }
                None => break,
            }
        }

        (sum, sum_sq, completed)
    }
}

/// Present-value discount factor over the model horizon.
#[inline]
fn discount_factor(model: &MertonJumpModel) -> f64 {
    (-model.rate() * model.maturity()).exp()
}

/// Discounted mean and standard error from running sums.
fn finalise(sum: f64, sum_sq: f64, count: usize, discount: f64) -> McEstimate {
    let n = count as f64;
    let mean = sum / n;

    let std_error = if count > 1 {
        let variance = ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    } else {
        0.0
    };

    McEstimate {
        price: discount * mean,
        std_error: discount * std_error,
        paths_used: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::models::JumpParameters;

    fn test_model() -> MertonJumpModel {
        let jumps = JumpParameters::new(0.1, -0.2, 0.1).unwrap();
        MertonJumpModel::new(100.0, 0.05, 0.2, jumps, 1.0, 12).unwrap()
    }

    fn estimator(n_paths: usize, seed: u64) -> MonteCarloEstimator {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloEstimator::new(config).unwrap()
    }

    #[test]
    fn test_zero_paths_is_config_error() {
        let result = MonteCarloConfig::builder().n_paths(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_price_positive_with_sane_error() {
        let estimate = estimator(20_000, 42)
            .price(&test_model(), 100.0, OptionKind::Call)
            .unwrap();

        assert!(estimate.price > 0.0);
        assert!(estimate.std_error > 0.0);
        assert!(estimate.std_error < estimate.price * 0.1);
        assert_eq!(estimate.paths_used, 20_000);
    }

    #[test]
    fn test_deterministic_forward_price() {
        // With sigma = 0 and lambda = 0 every payoff is the forward payoff,
        // so the discounted estimate is exact: S - K*exp(-rT)
        let model =
            MertonJumpModel::new(100.0, 0.05, 0.0, JumpParameters::none(), 1.0, 8).unwrap();
        let estimate = estimator(100, 42)
            .price(&model, 100.0, OptionKind::Call)
            .unwrap();

        let expected = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(estimate.price, expected, epsilon = 1e-10);
        // Identical payoffs: variance is zero up to accumulation rounding
        assert!(estimate.std_error < 1e-6);
    }

    #[test]
    fn test_reproducible_for_seed() {
        let model = test_model();
        let a = estimator(5_000, 7)
            .price(&model, 100.0, OptionKind::Call)
            .unwrap();
        let b = estimator(5_000, 7)
            .price(&model, 100.0, OptionKind::Call)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_put_price_non_negative() {
        let estimate = estimator(5_000, 42)
            .price(&test_model(), 100.0, OptionKind::Put)
            .unwrap();
        assert!(estimate.price >= 0.0);
    }

    #[test]
    fn test_parallel_reproducible_for_seed() {
        let model = test_model();
        let a = estimator(50_000, 11)
            .price_parallel(&model, 100.0, OptionKind::Call)
            .unwrap();
        let b = estimator(50_000, 11)
            .price_parallel(&model, 100.0, OptionKind::Call)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_agrees_with_sequential() {
        // Different stream layouts, same distribution: estimates must agree
        // within a few combined standard errors
        let model = test_model();
        let sequential = estimator(100_000, 42)
            .price(&model, 100.0, OptionKind::Call)
            .unwrap();
        let parallel = estimator(100_000, 42)
            .price_parallel(&model, 100.0, OptionKind::Call)
            .unwrap();

        let tolerance = 4.0 * (sequential.std_error + parallel.std_error);
        assert!(
            (sequential.price - parallel.price).abs() < tolerance,
            "sequential {} vs parallel {}",
            sequential.price,
            parallel.price
        );
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();

        let est = estimator(1_000, 42).with_cancel_token(token);
        let result = est.price(&test_model(), 100.0, OptionKind::Call);
        assert_eq!(result, Err(EstimatorError::Cancelled { completed: 0 }));
    }

    #[test]
    fn test_interim_requires_at_least_one_path() {
        let token = CancelToken::new();
        token.cancel();

        let est = estimator(1_000, 42).with_cancel_token(token);
        let result = est.interim_price(&test_model(), 100.0, OptionKind::Call);
        assert_eq!(result, Err(EstimatorError::Cancelled { completed: 0 }));
    }

    #[test]
    fn test_interim_equals_full_price_when_uncancelled() {
        let model = test_model();
        let full = estimator(2_000, 42)
            .price(&model, 100.0, OptionKind::Call)
            .unwrap();
        let interim = estimator(2_000, 42)
            .interim_price(&model, 100.0, OptionKind::Call)
            .unwrap();
        assert_eq!(full, interim);
    }

    #[test]
    fn test_parallel_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();

        let est = estimator(10_000, 42).with_cancel_token(token);
        let result = est.price_parallel(&test_model(), 100.0, OptionKind::Call);
        assert!(matches!(result, Err(EstimatorError::Cancelled { .. })));
    }

    #[test]
    fn test_confidence_interval_width() {
        let estimate = McEstimate {
            price: 10.0,
            std_error: 0.1,
            paths_used: 1000,
        };
        assert_relative_eq!(estimate.confidence_95(), 0.196, epsilon = 1e-12);
    }
}
