//! Black-Scholes pricing with continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
//! **Put Price**: P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r - q + sigma^2/2)T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)
//!
//! Degenerate inputs (`maturity <= 0` or `volatility <= 0`) fall back to
//! intrinsic value with delta 1 or 0 (call; mirrored for puts) and zero
//! for the remaining Greeks, avoiding the division by zero in d1 while
//! giving the sensible boundary answer.

use num_traits::Float;
use pricer_core::types::OptionKind;

use super::distributions::{norm_cdf, norm_pdf};
use crate::models::ModelError;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form prices and analytical Greeks under lognormal
/// dynamics with a continuous dividend yield.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend: T,
    /// Volatility (sigma)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// Zero volatility is accepted; pricing then falls back to intrinsic
    /// value rather than failing.
    ///
    /// # Errors
    /// - [`ModelError::InvalidSpot`] if `spot <= 0`
    /// - [`ModelError::InvalidVolatility`] if `volatility < 0`
    pub fn new(spot: T, rate: T, dividend: T, volatility: T) -> Result<Self, ModelError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility < zero {
            return Err(ModelError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// True when the inputs admit no diffusion term (expired or
    /// volatility-free), requiring the intrinsic-value fallback.
    #[inline]
    fn is_degenerate(&self, expiry: T) -> bool {
        expiry <= T::zero() || self.volatility <= T::zero()
    }

    /// d1 = (ln(S/K) + (r - q + sigma^2/2)T) / (sigma*sqrt(T))
    ///
    /// Callers must rule out degenerate inputs first.
    #[inline]
    fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d2 = d1 - sigma*sqrt(T)
    #[inline]
    fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2), or intrinsic value for
    /// degenerate inputs.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return OptionKind::Call.payoff(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let forward = self.spot * (-self.dividend * expiry).exp();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        forward * norm_cdf(d1) - discounted_strike * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1), or intrinsic value for
    /// degenerate inputs.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return OptionKind::Put.payoff(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let forward = self.spot * (-self.dividend * expiry).exp();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        discounted_strike * norm_cdf(-d2) - forward * norm_cdf(-d1)
    }

    /// Computes the price for the given option kind.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (dV/dS).
    ///
    /// - Call: e^(-qT)·N(d1), or 1/0 at the intrinsic boundary
    /// - Put: e^(-qT)·(N(d1) - 1), or -1/0 at the intrinsic boundary
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        let zero = T::zero();
        let one = T::one();

        if self.is_degenerate(expiry) {
            return match kind {
                OptionKind::Call => {
                    if self.spot > strike {
                        one
                    } else {
                        zero
                    }
                }
                OptionKind::Put => {
                    if self.spot < strike {
                        -one
                    } else {
                        zero
                    }
                }
            };
        }

        let carry = (-self.dividend * expiry).exp();
        let n_d1 = norm_cdf(self.d1(strike, expiry));

        match kind {
            OptionKind::Call => carry * n_d1,
            OptionKind::Put => carry * (n_d1 - one),
        }
    }

    /// Computes Gamma (d2V/dS2), identical for calls and puts.
    ///
    /// Gamma = e^(-qT)·phi(d1) / (S·sigma·sqrt(T))
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let carry = (-self.dividend * expiry).exp();
        let d1 = self.d1(strike, expiry);

        carry * norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (dV/dsigma), identical for calls and puts.
    ///
    /// Vega = S·e^(-qT)·sqrt(T)·phi(d1)
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let carry = (-self.dividend * expiry).exp();
        let d1 = self.d1(strike, expiry);

        self.spot * carry * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (dV/dt), typically negative (time decay).
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let two = T::from(2.0).unwrap();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let forward = self.spot * (-self.dividend * expiry).exp();
        let discounted_strike = strike * (-self.rate * expiry).exp();

        // Shared diffusion decay term
        let decay = -forward * norm_pdf(d1) * self.volatility / (two * expiry.sqrt());

        match kind {
            OptionKind::Call => {
                decay - self.rate * discounted_strike * norm_cdf(d2)
                    + self.dividend * forward * norm_cdf(d1)
            }
            OptionKind::Put => {
                decay + self.rate * discounted_strike * norm_cdf(-d2)
                    - self.dividend * forward * norm_cdf(-d1)
            }
        }
    }

    /// Computes Rho (dV/dr).
    ///
    /// - Call: K·T·e^(-rT)·N(d2)
    /// - Put: -K·T·e^(-rT)·N(-d2)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        match kind {
            OptionKind::Call => expiry * discounted_strike * norm_cdf(d2),
            OptionKind::Put => -expiry * discounted_strike * norm_cdf(-d2),
        }
    }
}
