//! # Pricer Engine
//!
//! Monte Carlo estimation and runtime strategy dispatch for European
//! options under Merton jump-diffusion dynamics.
//!
//! This crate provides:
//! - A seeded, reproducible random number generator ([`rng::PricerRng`])
//! - Lazy, single-pass terminal-price and payoff sequences ([`mc`])
//! - A discounting Monte Carlo estimator with sequential and parallel
//!   execution and cooperative cancellation ([`mc::MonteCarloEstimator`])
//! - A strategy registry mapping keys to pricing functions, with built-in
//!   closed-form and jump-diffusion strategies ([`strategy`])
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::EuropeanOption;
//! use pricer_pricing::strategy::{JumpMcSettings, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_builtin_strategies(JumpMcSettings::default());
//!
//! let option = EuropeanOption::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .build()
//!     .unwrap();
//!
//! let price = registry.get("black_scholes").unwrap()(&option).unwrap();
//! assert!(price.price > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod strategy;


// Re-export commonly used items for convenience
pub use mc::{CancelToken, McEstimate, MonteCarloConfig, MonteCarloEstimator};
pub use strategy::{Greek, JumpMcSettings, PricingFn, PricingResult, StrategyRegistry};
