//! Transaction-related types for bank-operations
//!
//! This module defines the normalized transaction record produced by every
//! source format, together with its status, date and money types.

use crate::types::OperationsError;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Transaction identifier
pub type TransactionId = u64;

/// Reference currency every amount is resolved into
pub const REFERENCE_CURRENCY: &str = "RUB";

/// Execution status of a bank operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation went through
    Executed,

    /// The operation was cancelled by the bank or the client
    Canceled,

    /// The operation has not been processed yet
    Pending,
}

impl Status {
    /// All statuses, in the order they are offered to the user
    pub const ALL: [Status; 3] = [Status::Executed, Status::Canceled, Status::Pending];

    /// Canonical uppercase literal, as found in bank exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Executed => "EXECUTED",
            Status::Canceled => "CANCELED",
            Status::Pending => "PENDING",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = OperationsError;

    /// Parse a status literal, ignoring case and surrounding whitespace
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "EXECUTED" => Ok(Status::Executed),
            "CANCELED" | "CANCELLED" => Ok(Status::Canceled),
            "PENDING" => Ok(Status::Pending),
            _ => Err(OperationsError::invalid_status(value)),
        }
    }
}

/// Direction of the date sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Oldest first
    #[default]
    Ascending,

    /// Newest first
    Descending,
}

impl FromStr for SortDirection {
    type Err = OperationsError;

    /// Accepts English and Russian spellings
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "по возрастанию" | "возрастание" => {
                Ok(SortDirection::Ascending)
            }
            "desc" | "descending" | "по убыванию" | "убывание" => Ok(SortDirection::Descending),
            _ => Err(OperationsError::invalid_sort_direction(value)),
        }
    }
}

/// Normalized date of a record
///
/// Sources are parsed at read time. A value that fails to parse is kept as
/// text so the record can still be displayed, but it cannot be sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionDate {
    /// Successfully parsed date-time
    Parsed(NaiveDateTime),

    /// Raw text that matched none of the supported formats
    Invalid(String),

    /// The source had no date
    #[default]
    Missing,
}

/// Amount together with the currency it is denominated in
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    /// Raw amount in `currency`
    pub amount: Decimal,

    /// Three-letter currency code (e.g. RUB, USD, EUR)
    pub currency: String,

    /// Human-readable currency name from the source, e.g. "руб."
    pub currency_name: Option<String>,
}

impl Money {
    /// Create a Money value without a currency name
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Money {
            amount,
            currency: currency.to_string(),
            currency_name: None,
        }
    }
}

/// One bank operation, normalized from any source format
///
/// Every field except the date is optional. Absent fields make predicates
/// false and contribute zero to totals; they are never an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    /// Source identifier, informational only
    pub id: Option<TransactionId>,

    /// Execution status; `None` when absent or unrecognized in the source
    pub status: Option<Status>,

    /// Date of the operation
    pub date: TransactionDate,

    /// Free-text description, the target of keyword search
    pub description: Option<String>,

    /// Amount and currency
    pub amount: Option<Money>,

    /// Source account or card, e.g. "Maestro 1596837868705199"
    pub from: Option<String>,

    /// Destination account or card, e.g. "Счет 64686473678894779589"
    pub to: Option<String>,
}

impl Transaction {
    /// Currency code of the amount, if the record has one
    pub fn currency(&self) -> Option<&str> {
        self.amount.as_ref().map(|money| money.currency.as_str())
    }
}
