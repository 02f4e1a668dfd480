//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Normalized transaction record and its parts
//! - `error`: Error types for loading, validation, rates and masking

pub mod error;
pub mod transaction;

pub use error::{MaskError, OperationsError, RateError};
pub use transaction::{
    Money, SortDirection, Status, Transaction, TransactionDate, TransactionId,
    REFERENCE_CURRENCY,
};
