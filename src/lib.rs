//! Bank Operations Library
//! # Overview
//!
//! This library loads bank operations exported as JSON, CSV or Excel files,
//! selects them by status, currency and description keyword, orders them by
//! date, and renders a masked report with amounts converted to RUB.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Money, Status, errors)
//! - [`io`] - Format decoding and normalization into [`Transaction`]s
//! - [`core`] - Business logic components:
//!   - [`core::filters`] - Status, currency and keyword filters
//!   - [`core::sort`] - Stable date sort
//!   - [`core::pipeline`] - Filters and sort applied in order
//!   - [`core::resolver`] - Amount resolution into RUB
//!   - [`core::categories`] - Keyword categorization
//! - [`rates`] - Exchange-rate providers (HTTP, cache, static table)
//! - [`report`] - Masking, per-record formatting and the report
//! - [`cli`] - Argument parsing and the interactive questionnaire
//! - [`config`] - Environment configuration
//! - [`logging`] - Log sink setup
//!
//! # Amount Resolution
//!
//! Every amount is shown in RUB:
//!
//! - **RUB**: taken as is
//! - **USD, EUR**: multiplied by the live rate
//! - **Anything else, or no rate available**: taken 1:1 and flagged as a
//!   fallback in the record block and in the totals

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod rates;
pub mod report;
pub mod types;

pub use config::Config;
pub use crate::core::{process_pipeline, AmountResolver, PipelineOptions, RateProvider};
pub use io::{load_records, SourceFormat};
pub use report::TransactionFormatter;
pub use types::{
    MaskError, Money, OperationsError, RateError, SortDirection, Status, Transaction,
    TransactionDate, TransactionId,
};
