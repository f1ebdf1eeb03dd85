//! Random number generation for Monte Carlo simulation.
//!
//! This module provides seeded, reproducible random number generation.
//! Each simulation run (and, under parallel execution, each worker) owns
//! its own generator instance; generators are never shared mutably.

pub mod prng;

pub use prng::PricerRng;
