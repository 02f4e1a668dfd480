//! Error types for bank-operations
//!
//! This module defines the error types that can occur while loading,
//! filtering, converting and displaying transactions.
//!
//! # Error Categories
//!
//! - **File Errors**: File not found, unreadable file, unsupported format
//! - **Parse Errors**: Malformed CSV/JSON/XLSX content
//! - **Validation Errors**: Bad status literal, bad sort direction, bad answer,
//!   unparseable date
//! - **Rate Errors**: Failures of the exchange-rate provider ([`RateError`]),
//!   always recovered by the amount resolver
//! - **Masking Errors**: Card or account numbers of the wrong shape ([`MaskError`])

use thiserror::Error;

/// Main error type for bank-operations
///
/// Every variant is reported once to the immediate caller. The core never
/// loops on an error; re-prompting is the CLI's business.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationsError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading a file or the terminal
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Content of a source file could not be decoded
    ///
    /// Raised per record for CSV rows (the record is skipped) and per file for
    /// JSON documents that are not an array.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line or row number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The file extension does not map to a known source format
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat {
        /// The offending path or format name
        path: String,
    },

    /// Status literal is not one of EXECUTED, CANCELED, PENDING
    #[error("Invalid status '{value}', expected one of EXECUTED, CANCELED, PENDING")]
    InvalidStatus {
        /// The rejected literal
        value: String,
    },

    /// Sort direction literal is not recognized
    #[error("Invalid sort direction '{value}', expected ascending or descending")]
    InvalidSortDirection {
        /// The rejected literal
        value: String,
    },

    /// A yes/no or menu answer is not recognized
    #[error("Invalid answer '{value}'")]
    InvalidAnswer {
        /// The rejected answer
        value: String,
    },

    /// A record's date cannot be placed in a total order
    #[error("Invalid date '{value}'{}", id.map(|i| format!(" in transaction {}", i)).unwrap_or_default())]
    InvalidDate {
        /// Transaction ID (if available)
        id: Option<u64>,
        /// The raw date text, empty when the date is missing
        value: String,
    },

    /// A category definition is not of the form `NAME=kw1,kw2`
    #[error("Invalid category '{value}', expected NAME=keyword[,keyword...]")]
    InvalidCategory {
        /// The rejected definition
        value: String,
    },

    /// The user gave too many invalid answers to one question
    #[error("Too many invalid answers ({attempts}) to: {question}")]
    TooManyAttempts {
        /// The question that was asked
        question: String,
        /// How many answers were rejected
        attempts: usize,
    },

    /// The interactive prompt failed (no terminal, interrupted input, ...)
    #[error("Prompt failed: {message}")]
    Prompt {
        /// Description of the failure
        message: String,
    },

    /// The rate client could not be constructed
    #[error("Rate client error: {message}")]
    RateClient {
        /// Description of the failure
        message: String,
    },

    /// Logging could not be initialized
    #[error("Logging error: {message}")]
    Logging {
        /// Description of the failure
        message: String,
    },
}

/// Failure of the external exchange-rate provider
///
/// The amount resolver converts every variant into a fallback resolution,
/// so these never abort a run. `Clone` lets a cache hand out the same failure
/// for every lookup of a currency within a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// No API key is configured
    #[error("no API key configured")]
    MissingApiKey,

    /// The request could not be sent or timed out
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The provider answered with a non-2xx status
    #[error("provider returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response holds no usable rate for the currency
    #[error("no RUB rate for {currency}")]
    RateNotFound {
        /// Currency that was looked up
        currency: String,
    },

    /// The response body is not the expected JSON
    #[error("malformed response: {message}")]
    Malformed {
        /// Description of the decoding failure
        message: String,
    },

    /// The currency is outside the set the resolver converts
    #[error("unsupported currency {currency}")]
    UnsupportedCurrency {
        /// The currency code
        currency: String,
    },
}

/// Malformed masking input
///
/// Distinguishable from a successfully masked value; the formatter renders it
/// as an explicit marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// Card numbers must be exactly 16 digits
    #[error("invalid card number")]
    InvalidCardNumber,

    /// Account numbers must be at least 4 digits
    #[error("invalid account number")]
    InvalidAccountNumber,
}

// Conversion from io::Error to OperationsError
impl From<std::io::Error> for OperationsError {
    fn from(error: std::io::Error) -> Self {
        OperationsError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to OperationsError
impl From<csv::Error> for OperationsError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        OperationsError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to OperationsError
impl From<serde_json::Error> for OperationsError {
    fn from(error: serde_json::Error) -> Self {
        let line = match error.line() {
            0 => None,
            line => Some(line as u64),
        };

        OperationsError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl OperationsError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        OperationsError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        OperationsError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    /// Create an UnsupportedFormat error
    pub fn unsupported_format(path: &str) -> Self {
        OperationsError::UnsupportedFormat {
            path: path.to_string(),
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(value: &str) -> Self {
        OperationsError::InvalidStatus {
            value: value.to_string(),
        }
    }

    /// Create an InvalidSortDirection error
    pub fn invalid_sort_direction(value: &str) -> Self {
        OperationsError::InvalidSortDirection {
            value: value.to_string(),
        }
    }

    /// Create an InvalidAnswer error
    pub fn invalid_answer(value: &str) -> Self {
        OperationsError::InvalidAnswer {
            value: value.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(id: Option<u64>, value: &str) -> Self {
        OperationsError::InvalidDate {
            id,
            value: value.to_string(),
        }
    }

    /// Create an InvalidCategory error
    pub fn invalid_category(value: &str) -> Self {
        OperationsError::InvalidCategory {
            value: value.to_string(),
        }
    }

    /// Create a Prompt error
    pub fn prompt(message: impl std::fmt::Display) -> Self {
        OperationsError::Prompt {
            message: message.to_string(),
        }
    }
}

impl RateError {
    /// Create a Network error
    pub fn network(message: impl std::fmt::Display) -> Self {
        RateError::Network {
            message: message.to_string(),
        }
    }

    /// Create a RateNotFound error
    pub fn rate_not_found(currency: &str) -> Self {
        RateError::RateNotFound {
            currency: currency.to_string(),
        }
    }

    /// Create a Malformed error
    pub fn malformed(message: impl std::fmt::Display) -> Self {
        RateError::Malformed {
            message: message.to_string(),
        }
    }

    /// Create an UnsupportedCurrency error
    pub fn unsupported_currency(currency: &str) -> Self {
        RateError::UnsupportedCurrency {
            currency: currency.to_string(),
        }
    }
}
