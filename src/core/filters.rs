//! Predicate filters over transaction sequences
//!
//! Every filter is pure: it borrows the input and returns the surviving
//! records as a new vector, in input order. Records lacking the inspected
//! field never match. Filters are idempotent and commute, so applying them in
//! any order selects the same set.

use crate::types::{Status, Transaction};

/// Keep records with the given status
pub fn by_status(records: &[Transaction], status: Status) -> Vec<Transaction> {
    records
        .iter()
        .filter(|transaction| transaction.status == Some(status))
        .cloned()
        .collect()
}

/// Keep records whose currency code equals `code` exactly
pub fn by_currency(records: &[Transaction], code: &str) -> Vec<Transaction> {
    records
        .iter()
        .filter(|transaction| transaction.currency() == Some(code))
        .cloned()
        .collect()
}

/// Keep records whose description contains `text`, ignoring case
///
/// An empty (or blank) `text` keeps every record, including records without a
/// description. Otherwise `text` is matched as given, surrounding spaces
/// included.
pub fn by_keyword(records: &[Transaction], text: &str) -> Vec<Transaction> {
    if text.trim().is_empty() {
        return records.to_vec();
    }
    let needle = text.to_lowercase();

    records
        .iter()
        .filter(|transaction| {
            transaction
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
