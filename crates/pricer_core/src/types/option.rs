//! European option value object.
//!
//! This module provides the validated option/market parameter bundle that
//! the pricing layers consume. Construction performs eager field-by-field
//! validation; no partially-valid option can exist. Raw configuration
//! parsing belongs to the surrounding application layer, which hands the
//! core an already-typed value of this type.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Option exercise payoff direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OptionKind {
    /// Call option: pays `max(S_T - K, 0)`.
    #[default]
    Call,
    /// Put option: pays `max(K - S_T, 0)`.
    Put,
}

impl OptionKind {
    /// Computes the settlement value for a terminal price and strike.
    ///
    /// Introduces no randomness; pure function of its arguments.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.payoff(105.0, 100.0), 5.0);
    /// assert_eq!(OptionKind::Put.payoff(105.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff<T: Float>(&self, terminal: T, strike: T) -> T {
        let zero = T::zero();
        let intrinsic = match self {
            OptionKind::Call => terminal - strike,
            OptionKind::Put => strike - terminal,
        };
        if intrinsic > zero {
            intrinsic
        } else {
            zero
        }
    }
}

/// Field-level validation errors for [`EuropeanOption`].
///
/// Each variant identifies the offending parameter and the violated
/// constraint, so callers can report configuration failures precisely.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionError {
    /// Spot price must be strictly positive.
    #[error("Invalid spot price: S = {spot} (must be > 0)")]
    InvalidSpot {
        /// The rejected spot value.
        spot: f64,
    },

    /// Strike price must be strictly positive.
    #[error("Invalid strike price: K = {strike} (must be > 0)")]
    InvalidStrike {
        /// The rejected strike value.
        strike: f64,
    },

    /// Risk-free rate must be non-negative.
    #[error("Invalid rate: r = {rate} (must be >= 0)")]
    InvalidRate {
        /// The rejected rate value.
        rate: f64,
    },

    /// Dividend yield must be non-negative.
    #[error("Invalid dividend yield: q = {dividend} (must be >= 0)")]
    InvalidDividend {
        /// The rejected dividend value.
        dividend: f64,
    },

    /// Volatility must be non-negative.
    #[error("Invalid volatility: sigma = {volatility} (must be >= 0)")]
    InvalidVolatility {
        /// The rejected volatility value.
        volatility: f64,
    },

    /// Maturity must be non-negative.
    #[error("Invalid maturity: T = {maturity} (must be >= 0)")]
    InvalidMaturity {
        /// The rejected maturity value.
        maturity: f64,
    },
}

impl From<OptionError> for super::PricingError {
    fn from(err: OptionError) -> Self {
        super::PricingError::InvalidInput(err.to_string())
    }
}

/// Validated European option and market parameters.
///
/// Immutable once constructed. Maturity zero is accepted so that expired
/// options can still be valued at intrinsic by the closed-form pricer;
/// simulation models impose their own stricter `maturity > 0` requirement
/// at construction.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::{EuropeanOption, OptionKind};
///
/// let option = EuropeanOption::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .maturity(1.0)
///     .kind(OptionKind::Put)
///     .build()
///     .unwrap();
///
/// assert_eq!(option.strike(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOption<T: Float> {
    spot: T,
    strike: T,
    rate: T,
    dividend: T,
    volatility: T,
    maturity: T,
    kind: OptionKind,
}

impl<T: Float> EuropeanOption<T> {
    /// Creates a builder with dividend yield 0 and kind [`OptionKind::Call`]
    /// as defaults.
    #[inline]
    pub fn builder() -> EuropeanOptionBuilder<T> {
        EuropeanOptionBuilder::default()
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the immediate-exercise value at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> T {
        self.kind.payoff(self.spot, self.strike)
    }
}

/// Builder for [`EuropeanOption`].
///
/// Spot, strike, rate, volatility, and maturity must be supplied; dividend
/// yield defaults to zero and kind to `Call`. Validation happens once at
/// [`build`](EuropeanOptionBuilder::build).
#[derive(Debug, Clone)]
pub struct EuropeanOptionBuilder<T: Float> {
    spot: Option<T>,
    strike: Option<T>,
    rate: Option<T>,
    dividend: T,
    volatility: Option<T>,
    maturity: Option<T>,
    kind: OptionKind,
}

impl<T: Float> Default for EuropeanOptionBuilder<T> {
    fn default() -> Self {
        Self {
            spot: None,
            strike: None,
            rate: None,
            dividend: T::zero(),
            volatility: None,
            maturity: None,
            kind: OptionKind::Call,
        }
    }
}

impl<T: Float> EuropeanOptionBuilder<T> {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: T) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: T) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: T) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield.
    #[inline]
    pub fn dividend(mut self, dividend: T) -> Self {
        self.dividend = dividend;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: T) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: T) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the option kind.
    #[inline]
    pub fn kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Validates and builds the option.
    ///
    /// # Errors
    /// Returns [`OptionError`] naming the first offending field:
    /// spot and strike must be positive; rate, dividend, and volatility
    /// non-negative; maturity non-negative. A missing required field is
    /// reported as that field's constraint violation on `NaN`.
    pub fn build(self) -> Result<EuropeanOption<T>, OptionError> {
        let zero = T::zero();
        let nan = T::nan();

        let spot = self.spot.unwrap_or(nan);
        if !(spot > zero) {
            return Err(OptionError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        let strike = self.strike.unwrap_or(nan);
        if !(strike > zero) {
            return Err(OptionError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        let rate = self.rate.unwrap_or(nan);
        if !(rate >= zero) {
            return Err(OptionError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(self.dividend >= zero) {
            return Err(OptionError::InvalidDividend {
                dividend: self.dividend.to_f64().unwrap_or(f64::NAN),
            });
        }

        let volatility = self.volatility.unwrap_or(nan);
        if !(volatility >= zero) {
            return Err(OptionError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        let maturity = self.maturity.unwrap_or(nan);
        if !(maturity >= zero) {
            return Err(OptionError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(EuropeanOption {
            spot,
            strike,
            rate,
            dividend: self.dividend,
            volatility,
            maturity,
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> EuropeanOptionBuilder<f64> {
        EuropeanOption::builder()
            .spot(100.0)
            .strike(100.0)
            .rate(0.05)
            .volatility(0.2)
            .maturity(1.0)
    }

    // ==========================================================
    // Payoff Tests
    // ==========================================================

    #[test]
    fn test_call_payoff_in_the_money() {
        assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
    }

    #[test]
    fn test_call_payoff_out_of_the_money() {
        assert_eq!(OptionKind::Call.payoff(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff_in_the_money() {
        assert_eq!(OptionKind::Put.payoff(90.0, 100.0), 10.0);
    }

    #[test]
    fn test_put_payoff_out_of_the_money() {
        assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_payoff_at_the_money_is_zero() {
        assert_eq!(OptionKind::Call.payoff(100.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.payoff(100.0, 100.0), 0.0);
    }

    // ==========================================================
    // Builder Tests
    // ==========================================================

    #[test]
    fn test_build_valid_option() {
        let option = valid_builder().build().unwrap();
        assert_eq!(option.spot(), 100.0);
        assert_eq!(option.strike(), 100.0);
        assert_eq!(option.rate(), 0.05);
        assert_eq!(option.dividend(), 0.0);
        assert_eq!(option.volatility(), 0.2);
        assert_eq!(option.maturity(), 1.0);
        assert_eq!(option.kind(), OptionKind::Call);
    }

    #[test]
    fn test_build_with_dividend_and_kind() {
        let option = valid_builder()
            .dividend(0.02)
            .kind(OptionKind::Put)
            .build()
            .unwrap();
        assert_eq!(option.dividend(), 0.02);
        assert_eq!(option.kind(), OptionKind::Put);
    }

    #[test]
    fn test_build_zero_maturity_allowed() {
        // Expired options are valid inputs for the intrinsic fallback
        let option = valid_builder().maturity(0.0).build().unwrap();
        assert_eq!(option.maturity(), 0.0);
    }

    #[test]
    fn test_build_zero_volatility_allowed() {
        let option = valid_builder().volatility(0.0).build().unwrap();
        assert_eq!(option.volatility(), 0.0);
    }

    #[test]
    fn test_build_invalid_spot() {
        let result = valid_builder().spot(0.0).build();
        assert!(matches!(result, Err(OptionError::InvalidSpot { .. })));

        let result = valid_builder().spot(-100.0).build();
        match result {
            Err(OptionError::InvalidSpot { spot }) => assert_eq!(spot, -100.0),
            _ => panic!("Expected InvalidSpot error"),
        }
    }

    #[test]
    fn test_build_invalid_strike() {
        let result = valid_builder().strike(-1.0).build();
        assert!(matches!(result, Err(OptionError::InvalidStrike { .. })));
    }

    #[test]
    fn test_build_invalid_rate() {
        let result = valid_builder().rate(-0.01).build();
        assert!(matches!(result, Err(OptionError::InvalidRate { .. })));
    }

    #[test]
    fn test_build_invalid_dividend() {
        let result = valid_builder().dividend(-0.01).build();
        assert!(matches!(result, Err(OptionError::InvalidDividend { .. })));
    }

    #[test]
    fn test_build_invalid_volatility() {
        let result = valid_builder().volatility(-0.2).build();
        assert!(matches!(result, Err(OptionError::InvalidVolatility { .. })));
    }

    #[test]
    fn test_build_invalid_maturity() {
        let result = valid_builder().maturity(-1.0).build();
        assert!(matches!(result, Err(OptionError::InvalidMaturity { .. })));
    }

    #[test]
    fn test_build_missing_field_rejected() {
        let result: Result<EuropeanOption<f64>, _> =
            EuropeanOption::builder().spot(100.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_intrinsic() {
        let call = valid_builder().spot(105.0).build().unwrap();
        assert_eq!(call.intrinsic(), 5.0);

        let put = valid_builder()
            .spot(95.0)
            .kind(OptionKind::Put)
            .build()
            .unwrap();
        assert_eq!(put.intrinsic(), 5.0);
    }

    #[test]
    fn test_option_error_into_pricing_error() {
        use crate::types::PricingError;

        let err = OptionError::InvalidSpot { spot: -1.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
