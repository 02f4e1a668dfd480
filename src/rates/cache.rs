//! Run-scoped rate cache
//!
//! Each currency is looked up at most once per run. Failures are cached too,
//! so an unreachable service costs one timeout per currency, not one per
//! record.

use crate::core::traits::RateProvider;
use crate::types::RateError;
use log::debug;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::HashMap;

/// Memoizing wrapper around another [`RateProvider`]
pub struct CachingRateProvider<P> {
    inner: P,
    answers: RefCell<HashMap<String, Result<Decimal, RateError>>>,
}

impl<P: RateProvider> CachingRateProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            answers: RefCell::new(HashMap::new()),
        }
    }
}

impl<P: RateProvider> RateProvider for CachingRateProvider<P> {
    fn rate(&self, currency: &str) -> Result<Decimal, RateError> {
        if let Some(answer) = self.answers.borrow().get(currency) {
            debug!("Using cached {} rate", currency);
            return answer.clone();
        }

        let answer = self.inner.rate(currency);
        self.answers
            .borrow_mut()
            .insert(currency.to_string(), answer.clone());
        answer
    }
}
