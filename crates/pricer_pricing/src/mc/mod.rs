//! Monte Carlo pricing kernel.
//!
//! This module provides the simulation infrastructure for pricing
//! European options by Monte Carlo:
//!
//! ```text
//! MonteCarloEstimator
//! ├── MonteCarloConfig   (path count, seed)
//! ├── TerminalPrices     (lazy single-pass terminal price sequence)
//! ├── PayoffSequence     (lazy payoff mapping)
//! └── CancelToken        (cooperative early abort)
//! ```
//!
//! Sequences are lazy and single-pass: terminal prices are produced one at
//! a time from independent path simulations and never materialised as a
//! collection, so memory stays flat regardless of the requested path
//! count. Draining a sequence exhausts it permanently.
//!
//! The estimator drains a payoff sequence to completion, discounts the
//! mean payoff at the risk-free rate, and reports the standard error of
//! the estimate. Path count is the cost/precision knob: the standard
//! error scales as `O(1/sqrt(N))`.

pub mod config;
pub mod error;
pub mod estimator;
pub mod sequence;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use error::{ConfigError, EstimatorError};
pub use estimator::{CancelToken, McEstimate, MonteCarloEstimator};
pub use sequence::{PayoffSequence, TerminalPrices};
