//! Presentation module
//!
//! # Components
//!
//! - `masks` - Card and account masking
//! - `formatter` - One display block per record
//! - `summary` - The full report with totals and categories

pub mod formatter;
pub mod masks;
pub mod summary;

pub use formatter::TransactionFormatter;
pub use masks::{mask_account, mask_card, mask_endpoint};
pub use summary::write_report;
