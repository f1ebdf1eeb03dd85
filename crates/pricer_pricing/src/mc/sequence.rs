//! Lazy terminal-price and payoff sequences.
//!
//! A [`TerminalPrices`] sequence produces a bounded number of terminal
//! prices, each from an independent path simulation, one at a time. It
//! tracks only a remaining count and the random source, never a
//! materialised collection, so memory stays flat for any path count.
//!
//! The sequences are deliberately single-pass: once drained, re-iterating
//! yields nothing. Draining `k` elements leaves `N - k` remaining.

use pricer_core::types::OptionKind;
use pricer_models::models::MertonJumpModel;

use crate::rng::PricerRng;

/// Lazy, single-pass sequence of simulated terminal prices.
///
/// Each pull advances the owned random source through one full path
/// simulation; paths are therefore statistically independent and the
/// sequence is exactly reproducible from its seed.
///
/// # Examples
/// ```rust
/// use pricer_models::models::{JumpParameters, MertonJumpModel};
/// use pricer_pricing::mc::TerminalPrices;
/// use pricer_pricing::rng::PricerRng;
///
/// let jumps = JumpParameters::new(0.1, -0.2, 0.1).unwrap();
/// let model = MertonJumpModel::new(100.0, 0.05, 0.2, jumps, 1.0, 4).unwrap();
///
/// let prices = TerminalPrices::new(&model, 5, PricerRng::from_seed(42));
/// let drained: Vec<f64> = prices.collect();
/// assert_eq!(drained.len(), 5);
/// assert!(drained.iter().all(|&p| p > 0.0));
/// ```
pub struct TerminalPrices<'a> {
    model: &'a MertonJumpModel,
    remaining: usize,
    rng: PricerRng,
}

impl<'a> TerminalPrices<'a> {
    /// Creates a sequence yielding `paths` terminal prices.
    ///
    /// A zero path count is permitted here and yields nothing; the
    /// estimator rejects it earlier as a configuration error.
    #[inline]
    pub fn new(model: &'a MertonJumpModel, paths: usize, rng: PricerRng) -> Self {
        Self {
            model,
            remaining: paths,
            rng,
        }
    }

    /// Returns the number of elements not yet produced.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Maps this sequence through the option payoff, preserving laziness
    /// and the single-pass property.
    #[inline]
    pub fn payoffs(self, strike: f64, kind: OptionKind) -> PayoffSequence<'a> {
        PayoffSequence {
            prices: self,
            strike,
            kind,
        }
    }
}

impl Iterator for TerminalPrices<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.model.simulate_terminal_price(&mut self.rng))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TerminalPrices<'_> {}

/// Lazy payoff sequence over simulated terminal prices.
///
/// Applies `payoff(S_T, K)` per element as the underlying sequence is
/// pulled; introduces no additional randomness.
pub struct PayoffSequence<'a> {
    prices: TerminalPrices<'a>,
    strike: f64,
    kind: OptionKind,
}

impl<'a> PayoffSequence<'a> {
    /// Creates a payoff sequence of `paths` elements.
    #[inline]
    pub fn new(
        model: &'a MertonJumpModel,
        paths: usize,
        rng: PricerRng,
        strike: f64,
        kind: OptionKind,
    ) -> Self {
        TerminalPrices::new(model, paths, rng).payoffs(strike, kind)
    }

    /// Returns the number of elements not yet produced.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.prices.remaining()
    }

    /// Returns the strike applied to each terminal price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl Iterator for PayoffSequence<'_> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        self.prices
            .next()
            .map(|terminal| self.kind.payoff(terminal, self.strike))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.prices.size_hint()
    }
}

impl ExactSizeIterator for PayoffSequence<'_> {}
