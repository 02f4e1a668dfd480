//! Exchange-rate providers
//!
//! # Components
//!
//! - `apilayer` - Blocking HTTP client for the live rate service
//! - `cache` - Run-scoped memoization of lookups
//! - [`StaticRates`] - Fixed in-memory table, used offline and in tests

pub mod apilayer;
pub mod cache;

pub use apilayer::ApiLayerRates;
pub use cache::CachingRateProvider;

use crate::core::traits::RateProvider;
use crate::types::RateError;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Fixed table of RUB rates
///
/// An empty table answers every lookup with [`RateError::RateNotFound`], which
/// sends every foreign amount through the fallback.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: HashMap<String, Decimal>,
}

impl StaticRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rate for `currency`
    pub fn with_rate(mut self, currency: &str, rate: Decimal) -> Self {
        self.rates.insert(currency.to_uppercase(), rate);
        self
    }
}

impl RateProvider for StaticRates {
    fn rate(&self, currency: &str) -> Result<Decimal, RateError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| RateError::rate_not_found(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_rates() {
        let rates = StaticRates::new().with_rate("usd", Decimal::new(90, 0));
        assert_eq!(rates.rate("USD"), Ok(Decimal::new(90, 0)));
        assert_eq!(rates.rate("EUR"), Err(RateError::rate_not_found("EUR")));
    }

    #[test]
    fn test_empty_table_always_fails() {
        assert!(StaticRates::new().rate("USD").is_err());
    }
}
