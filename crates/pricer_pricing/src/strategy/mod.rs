//! Runtime pricing strategy dispatch.
//!
//! Decouples "which pricing algorithm" from "how options are represented":
//! a [`StrategyRegistry`] maps string keys to pricing functions
//! `EuropeanOption -> PricingResult`, with one designated default key.
//! Registration happens deterministically at a defined startup point (the
//! registry constructor); afterwards the registry is read-only.
//!
//! Built-in strategies:
//! - `"black_scholes"` (default): closed-form price and Greeks
//! - `"jump_mc"`: Merton jump-diffusion Monte Carlo

pub mod builtin;
pub mod registry;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use pricer_core::types::{EuropeanOption, PricingError};

pub use builtin::{black_scholes_pricer, jump_mc_pricer, JumpMcSettings, BLACK_SCHOLES, JUMP_MC};
pub use registry::{RegistryError, StrategyRegistry};

/// Greek sensitivity identifier.
///
/// Used as the key of the Greeks mapping in [`PricingResult`]; the
/// ordering gives serialised rows a deterministic column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Greek {
    /// Delta: dV/dS (sensitivity to spot price).
    Delta,
    /// Gamma: d2V/dS2 (convexity with respect to spot).
    Gamma,
    /// Vega: dV/dsigma (sensitivity to volatility).
    Vega,
    /// Theta: dV/dt (time decay).
    Theta,
    /// Rho: dV/dr (sensitivity to interest rate).
    Rho,
}

impl Greek {
    /// Returns the lowercase name used in reports.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Greek::Delta => "delta",
            Greek::Gamma => "gamma",
            Greek::Vega => "vega",
            Greek::Theta => "theta",
            Greek::Rho => "rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one strategy invocation.
///
/// Read-only to the caller; suitable for the surrounding reporting layer
/// to serialise to CSV/JSON/database rows. Strategies without analytical
/// sensitivities leave the Greeks map empty rather than fabricating
/// zeros.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Sensitivities keyed by Greek name.
    pub greeks: BTreeMap<Greek, f64>,
}

impl PricingResult {
    /// Creates a result carrying only a price.
    #[inline]
    pub fn price_only(price: f64) -> Self {
        Self {
            price,
            greeks: BTreeMap::new(),
        }
    }

    /// Looks up a single Greek.
    #[inline]
    pub fn greek(&self, greek: Greek) -> Option<f64> {
        self.greeks.get(&greek).copied()
    }
}

/// A pricing strategy: a shareable function from option to result.
///
/// Strategies report configuration failures (invalid parameters, unknown
/// settings) as typed [`PricingError`] values raised at dispatch time;
/// simulation itself cannot fail once started with valid parameters.
pub type PricingFn =
    Arc<dyn Fn(&EuropeanOption<f64>) -> Result<PricingResult, PricingError> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_names() {
        assert_eq!(Greek::Delta.as_str(), "delta");
        assert_eq!(Greek::Rho.to_string(), "rho");
    }

    #[test]
    fn test_greek_ordering_is_stable() {
        let mut greeks = BTreeMap::new();
        greeks.insert(Greek::Rho, 1.0);
        greeks.insert(Greek::Delta, 2.0);
        greeks.insert(Greek::Vega, 3.0);

        let order: Vec<Greek> = greeks.keys().copied().collect();
        assert_eq!(order, vec![Greek::Delta, Greek::Vega, Greek::Rho]);
    }

    #[test]
    fn test_price_only_result() {
        let result = PricingResult::price_only(10.5);
        assert_eq!(result.price, 10.5);
        assert!(result.greeks.is_empty());
        assert_eq!(result.greek(Greek::Delta), None);
    }
}
