//! Per-record presentation
//!
//! A record becomes a block of up to three lines:
//!
//! ```text
//! 26.08.2019 Перевод организации
//! Maestro 1596 83** **** 5199 -> Счет **9589
//! Amount: 31957.58 RUB
//! ```

use crate::core::resolver::{AmountResolver, Resolution, ResolvedAmount};
use crate::core::traits::RateProvider;
use crate::report::masks::mask_endpoint;
use crate::types::{Transaction, TransactionDate, REFERENCE_CURRENCY};
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for a record without a date
const MISSING_DATE: &str = "--.--.----";

/// Description fragments that mark a transfer between two endpoints
const TRANSFER_MARKERS: [&str; 2] = ["перевод", "transfer"];

/// Round to cents, halves away from zero, and render with two decimals
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Whether the description names a transfer
pub fn is_transfer(transaction: &Transaction) -> bool {
    transaction.description.as_deref().is_some_and(|description| {
        let description = description.to_lowercase();
        TRANSFER_MARKERS
            .iter()
            .any(|marker| description.contains(marker))
    })
}

/// Renders records using an [`AmountResolver`] for the amount line
pub struct TransactionFormatter<'a, P> {
    resolver: &'a AmountResolver<P>,
}

impl<'a, P: RateProvider> TransactionFormatter<'a, P> {
    pub fn new(resolver: &'a AmountResolver<P>) -> Self {
        Self { resolver }
    }

    /// Render one record as a newline-separated block (no trailing newline)
    pub fn format(&self, transaction: &Transaction) -> String {
        let resolved = self.resolver.resolve(transaction);
        self.format_resolved(transaction, &resolved)
    }

    /// Render one record whose amount has already been resolved
    pub fn format_resolved(&self, transaction: &Transaction, resolved: &ResolvedAmount) -> String {
        let mut lines = vec![self.header_line(transaction)];
        if let Some(route) = self.route_line(transaction) {
            lines.push(route);
        }
        lines.push(amount_line(resolved));
        lines.join("\n")
    }

    fn header_line(&self, transaction: &Transaction) -> String {
        let date = match &transaction.date {
            TransactionDate::Parsed(date) => date.format("%d.%m.%Y").to_string(),
            TransactionDate::Invalid(text) => text.clone(),
            TransactionDate::Missing => MISSING_DATE.to_string(),
        };

        match transaction.description.as_deref() {
            Some(description) => format!("{} {}", date, description),
            None => date,
        }
    }

    fn route_line(&self, transaction: &Transaction) -> Option<String> {
        match (&transaction.from, &transaction.to) {
            (Some(from), Some(to)) if is_transfer(transaction) => {
                Some(format!("{} -> {}", mask_endpoint(from), mask_endpoint(to)))
            }
            (_, Some(to)) => Some(mask_endpoint(to)),
            _ => None,
        }
    }

}

fn amount_line(resolved: &ResolvedAmount) -> String {
    match &resolved.resolution {
        Resolution::Missing => "Amount: n/a".to_string(),
        Resolution::Fallback(reason) => format!(
            "Amount: {} {} (fallback: {} not converted, {})",
            format_money(resolved.value),
            REFERENCE_CURRENCY,
            resolved.source_currency.as_deref().unwrap_or("?"),
            reason
        ),
        Resolution::Direct | Resolution::Converted { .. } => {
            format!("Amount: {} {}", format_money(resolved.value), REFERENCE_CURRENCY)
        }
    }
}
