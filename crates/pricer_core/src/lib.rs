//! # pricer_core: Foundation Types for Option Pricing
//!
//! ## Foundation Layer Role
//!
//! pricer_core serves as the bottom layer of the pricing workspace,
//! providing:
//! - The validated European option value object (`types::option`)
//! - Option kind and payoff functions (`types::option`)
//! - Error types: `PricingError`, `OptionError` (`types::error`, `types::option`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other pricer_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{EuropeanOption, OptionKind};
//!
//! let option = EuropeanOption::builder()
//!     .spot(100.0)
//!     .strike(105.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(option.kind(), OptionKind::Call);
//! assert_eq!(option.intrinsic(), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{EuropeanOption, EuropeanOptionBuilder, OptionError, OptionKind, PricingError};
