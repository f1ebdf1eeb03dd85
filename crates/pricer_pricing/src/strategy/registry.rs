//! Strategy registry for runtime pricing method selection.

use std::collections::BTreeMap;

use pricer_core::types::PricingError;
use thiserror::Error;
use tracing::debug;

use super::builtin::{black_scholes_pricer, jump_mc_pricer, JumpMcSettings, BLACK_SCHOLES, JUMP_MC};
use super::PricingFn;

/// Registry lookup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No strategy registered under the requested key.
    #[error("Unknown pricing strategy '{key}'. Available: {available}")]
    UnknownStrategy {
        /// The key that failed to resolve.
        key: String,
        /// Comma-separated list of registered keys.
        available: String,
    },

    /// The configured default key was never registered.
    ///
    /// This is a startup invariant violation, not a recoverable runtime
    /// condition: a registry is expected to have its default registered
    /// before any dispatch happens.
    #[error("Default strategy '{key}' was never registered")]
    MissingDefaultStrategy {
        /// The configured default key.
        key: String,
    },
}

impl From<RegistryError> for PricingError {
    fn from(err: RegistryError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Runtime mapping from strategy keys to pricing functions.
///
/// The registry is an explicit value constructed at a defined startup
/// point and passed to whatever needs dispatch; there is no implicit
/// global state, so registration order is exactly construction order.
/// Mutation happens only through [`register`](Self::register); normal
/// operation is read-only lookup.
///
/// # Examples
/// ```rust
/// use pricer_pricing::strategy::{JumpMcSettings, StrategyRegistry};
///
/// let registry = StrategyRegistry::with_builtin_strategies(JumpMcSettings::default());
/// assert!(registry.contains("black_scholes"));
/// assert!(registry.contains("jump_mc"));
/// assert!(registry.default_strategy().is_ok());
/// ```
pub struct StrategyRegistry {
    strategies: BTreeMap<String, PricingFn>,
    default_key: String,
}

impl StrategyRegistry {
    /// Creates an empty registry with the given default key.
    ///
    /// The default key may be registered later; dispatching through
    /// [`default_strategy`](Self::default_strategy) before that fails with
    /// [`RegistryError::MissingDefaultStrategy`].
    pub fn new(default_key: impl Into<String>) -> Self {
        Self {
            strategies: BTreeMap::new(),
            default_key: default_key.into(),
        }
    }

    /// Creates a registry with the built-in strategies registered.
    ///
    /// Registers `"black_scholes"` (the default key) and `"jump_mc"`
    /// configured from `settings`, in that order.
    pub fn with_builtin_strategies(settings: JumpMcSettings) -> Self {
        let mut registry = Self::new(BLACK_SCHOLES);
        registry.register(BLACK_SCHOLES, black_scholes_pricer());
        registry.register(JUMP_MC, jump_mc_pricer(settings));
        registry
    }

    /// Registers a strategy under a key, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, strategy: PricingFn) {
        let key = key.into();
        debug!(key = %key, "registered pricing strategy");
        self.strategies.insert(key, strategy);
    }

    /// Looks up a strategy by key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownStrategy`] listing the registered
    /// keys when the key is absent.
    pub fn get(&self, key: &str) -> Result<PricingFn, RegistryError> {
        self.strategies
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownStrategy {
                key: key.to_string(),
                available: self.keys().collect::<Vec<_>>().join(", "),
            })
    }

    /// Returns the strategy registered under the default key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingDefaultStrategy`] when the default
    /// key was never registered.
    pub fn default_strategy(&self) -> Result<PricingFn, RegistryError> {
        self.strategies
            .get(&self.default_key)
            .cloned()
            .ok_or_else(|| RegistryError::MissingDefaultStrategy {
                key: self.default_key.clone(),
            })
    }

    /// Returns the configured default key.
    #[inline]
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// True when a strategy is registered under the key.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    /// Iterates the registered keys in sorted order.
    ///
    /// Exposed so a surrounding CLI or validation layer can list the
    /// available strategies.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::PricingResult;
    use std::sync::Arc;

    fn constant_strategy(price: f64) -> PricingFn {
        Arc::new(move |_option| Ok(PricingResult::price_only(price)))
    }

    #[test]
    fn test_register_then_get_returns_same_function() {
        let mut registry = StrategyRegistry::new("custom");
        let strategy = constant_strategy(1.0);
        registry.register("custom", strategy.clone());

        let resolved = registry.get("custom").unwrap();
        assert!(Arc::ptr_eq(&strategy, &resolved));
    }

    #[test]
    fn test_get_unknown_key_fails() {
        let registry = StrategyRegistry::with_builtin_strategies(JumpMcSettings::default());
        let result = registry.get("binomial");

        match result {
            Err(RegistryError::UnknownStrategy { key, available }) => {
                assert_eq!(key, "binomial");
                assert!(available.contains("black_scholes"));
                assert!(available.contains("jump_mc"));
            }
            _ => panic!("Expected UnknownStrategy error"),
        }
    }

    #[test]
    fn test_default_strategy_resolves() {
        let registry = StrategyRegistry::with_builtin_strategies(JumpMcSettings::default());
        assert_eq!(registry.default_key(), "black_scholes");
        assert!(registry.default_strategy().is_ok());
    }

    #[test]
    fn test_missing_default_is_startup_violation() {
        let registry = StrategyRegistry::new("black_scholes");
        let result = registry.default_strategy();
        assert_eq!(
            result.err(),
            Some(RegistryError::MissingDefaultStrategy {
                key: "black_scholes".to_string()
            })
        );
    }

    #[test]
    fn test_keys_sorted_for_listing() {
        let mut registry = StrategyRegistry::new("a");
        registry.register("b", constant_strategy(1.0));
        registry.register("a", constant_strategy(2.0));

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = StrategyRegistry::new("k");
        registry.register("k", constant_strategy(1.0));
        let replacement = constant_strategy(2.0);
        registry.register("k", replacement.clone());

        let resolved = registry.get("k").unwrap();
        assert!(Arc::ptr_eq(&replacement, &resolved));
    }

    #[test]
    fn test_error_into_pricing_error() {
        use pricer_core::types::PricingError;

        let err = RegistryError::UnknownStrategy {
            key: "x".to_string(),
            available: "black_scholes".to_string(),
        };
        let pricing_err: PricingError = err.into();
        assert!(matches!(pricing_err, PricingError::InvalidInput(_)));
    }
}
