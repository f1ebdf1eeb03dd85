//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions used both as a standalone
//! strategy and as the cross-check for the Monte Carlo engine:
//! - Black-Scholes pricing with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for use with any floating-point width
//! - **Intrinsic-value fallback** for degenerate maturity/volatility inputs
//!   instead of surfacing errors

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
