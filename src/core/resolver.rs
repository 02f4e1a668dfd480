//! Amount resolution into the reference currency
//!
//! The resolver converts a record's amount into RUB. It never fails: when no
//! live rate is available the amount is taken 1:1 and the result is marked
//! [`Resolution::Fallback`], so callers can tell a degraded value from a
//! converted one.

use crate::core::traits::RateProvider;
use crate::types::{RateError, Transaction, REFERENCE_CURRENCY};
use log::{info, warn};
use rust_decimal::Decimal;

/// Currencies converted through the rate provider by default
pub const DEFAULT_SUPPORTED_CURRENCIES: [&str; 2] = ["USD", "EUR"];

/// How a resolved amount was obtained
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The amount was already in RUB; no lookup was made
    Direct,

    /// Converted with a live rate
    Converted {
        /// RUB per unit of the source currency
        rate: Decimal,
    },

    /// No rate was available; the raw amount is used unconverted
    Fallback(RateError),

    /// The record has no amount; contributes zero
    Missing,
}

/// Amount of one record expressed in RUB
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAmount {
    /// The resolved value
    pub value: Decimal,

    /// Currency of the raw amount, if the record has one
    pub source_currency: Option<String>,

    /// How `value` was obtained
    pub resolution: Resolution,
}

impl ResolvedAmount {
    /// Whether the value is not a trustworthy RUB amount
    pub fn is_degraded(&self) -> bool {
        matches!(self.resolution, Resolution::Fallback(_))
    }
}

/// Aggregate of resolved amounts over a selection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    /// Sum of all resolved values
    pub total: Decimal,

    /// Records in RUB or converted with a live rate
    pub converted: usize,

    /// Records counted with the 1:1 fallback
    pub fallback: usize,

    /// Records without an amount
    pub missing: usize,
}

impl Totals {
    /// Add one resolved amount
    pub fn add(&mut self, resolved: &ResolvedAmount) {
        self.total += resolved.value;
        match resolved.resolution {
            Resolution::Direct | Resolution::Converted { .. } => self.converted += 1,
            Resolution::Fallback(_) => self.fallback += 1,
            Resolution::Missing => self.missing += 1,
        }
    }
}

impl<'a> FromIterator<&'a ResolvedAmount> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a ResolvedAmount>>(iter: I) -> Self {
        let mut totals = Totals::default();
        for resolved in iter {
            totals.add(resolved);
        }
        totals
    }
}

/// Converts record amounts into RUB through a [`RateProvider`]
pub struct AmountResolver<P> {
    provider: P,
    supported: Vec<String>,
}

impl<P: RateProvider> AmountResolver<P> {
    /// Create a resolver converting the default currencies (USD, EUR)
    pub fn new(provider: P) -> Self {
        Self::with_currencies(
            provider,
            DEFAULT_SUPPORTED_CURRENCIES.iter().map(|code| code.to_string()).collect(),
        )
    }

    /// Create a resolver converting the given currencies
    ///
    /// Any other non-RUB currency resolves through the fallback without a
    /// provider call.
    pub fn with_currencies(provider: P, supported: Vec<String>) -> Self {
        Self {
            provider,
            supported,
        }
    }

    /// Resolve a record's amount into RUB
    ///
    /// # Returns
    ///
    /// The resolved amount. Provider failures are logged as warnings and
    /// turned into [`Resolution::Fallback`].
    pub fn resolve(&self, transaction: &Transaction) -> ResolvedAmount {
        let Some(money) = &transaction.amount else {
            return ResolvedAmount {
                value: Decimal::ZERO,
                source_currency: None,
                resolution: Resolution::Missing,
            };
        };

        let currency = money.currency.as_str();
        let resolution = if currency == REFERENCE_CURRENCY {
            Resolution::Direct
        } else if !self.supported.iter().any(|code| code == currency) {
            Resolution::Fallback(RateError::unsupported_currency(currency))
        } else {
            match self.provider.rate(currency) {
                Ok(rate) => {
                    info!("Rate {}/{}: {}", currency, REFERENCE_CURRENCY, rate);
                    Resolution::Converted { rate }
                }
                Err(e) => Resolution::Fallback(e),
            }
        };

        let value = match &resolution {
            Resolution::Converted { rate } => money.amount * rate,
            _ => money.amount,
        };

        if let Resolution::Fallback(reason) = &resolution {
            warn!(
                "Amount {} {} of transaction {:?} left unconverted: {}",
                money.amount, currency, transaction.id, reason
            );
        }

        ResolvedAmount {
            value,
            source_currency: Some(money.currency.clone()),
            resolution,
        }
    }

    /// Resolve every record and aggregate the results
    pub fn summarize(&self, records: &[Transaction]) -> Totals {
        let resolved: Vec<ResolvedAmount> = records.iter().map(|t| self.resolve(t)).collect();
        resolved.iter().collect()
    }
}
