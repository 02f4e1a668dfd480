//! Core traits
//!
//! The exchange-rate lookup is the only external dependency of the core; it
//! sits behind [`RateProvider`] so the HTTP client, the run-scoped cache and
//! in-memory rate tables are interchangeable.

use crate::types::RateError;
use rust_decimal::Decimal;

/// Source of exchange rates into the reference currency (RUB)
pub trait RateProvider {
    /// How many RUB one unit of `currency` is worth
    ///
    /// # Errors
    ///
    /// Any [`RateError`]; callers treat every failure as "rate unavailable".
    fn rate(&self, currency: &str) -> Result<Decimal, RateError>;
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn rate(&self, currency: &str) -> Result<Decimal, RateError> {
        (**self).rate(currency)
    }
}

impl<P: RateProvider + ?Sized> RateProvider for Box<P> {
    fn rate(&self, currency: &str) -> Result<Decimal, RateError> {
        (**self).rate(currency)
    }
}
