//! Core business logic module
//!
//! This module contains the transaction selection and valuation components:
//! - `traits` - The exchange-rate provider abstraction
//! - `filters` - Status, currency and keyword filters
//! - `sort` - Stable date sort
//! - `pipeline` - Filters and sort applied in order
//! - `resolver` - Amount resolution into RUB with a flagged fallback
//! - `categories` - Keyword categorization

pub mod categories;
pub mod filters;
pub mod pipeline;
pub mod resolver;
pub mod sort;
pub mod traits;

pub use categories::{categorize, Category};
pub use pipeline::{process_pipeline, PipelineOptions};
pub use resolver::{AmountResolver, Resolution, ResolvedAmount, Totals};
pub use sort::sort_by_date;
pub use traits::RateProvider;
