//! # Pricer Models
//!
//! Stochastic dynamics and analytical pricing formulas.
//!
//! This crate provides:
//! - Merton jump-diffusion model with Euler-discretised path stepping
//! - Jump process parameters with the risk-neutral drift correction
//! - Closed-form Black-Scholes pricing with analytical Greeks
//! - Standard normal distribution functions for the analytical layer
//!
//! ## Design Principles
//!
//! - **Eager validation**: no partially-valid model can exist; every
//!   constructor rejects out-of-range parameters with a typed error
//! - **Immutable models**: a simulated path mutates only a local working
//!   price, never the model's own fields
//! - **Explicit randomness**: simulation methods take the random source as
//!   an argument, keeping models stateless across invocations

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;

pub use analytical::BlackScholes;
pub use models::{JumpParameters, MertonJumpModel, ModelError};
