//! Core financial types.
//!
//! This module provides:
//! - `EuropeanOption`: validated option/market parameter value object
//! - `OptionKind`: call/put selector with payoff functions
//! - `PricingError`: cross-layer pricing error taxonomy
//! - `OptionError`: field-level construction errors

pub mod error;
pub mod option;

pub use error::PricingError;
pub use option::{EuropeanOption, EuropeanOptionBuilder, OptionError, OptionKind};
