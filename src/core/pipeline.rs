//! Selection pipeline
//!
//! Applies the user's choices to a loaded record set: status, then currency,
//! then keyword, then the date sort.

use crate::core::filters::{by_currency, by_keyword, by_status};
use crate::core::sort::sort_by_date;
use crate::types::{OperationsError, SortDirection, Status, Transaction, REFERENCE_CURRENCY};
use log::debug;

/// Choices that select and order the records to report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOptions {
    /// Keep only records with this status
    pub status: Option<Status>,

    /// Sort by date in this direction; `None` keeps source order
    pub sort: Option<SortDirection>,

    /// Keep only RUB records
    pub currency_only: bool,

    /// Keep only records whose description contains this text
    pub keyword: Option<String>,
}

/// Run the filters and the sort over `records`
///
/// # Arguments
///
/// * `records` - Loaded records; not modified
/// * `options` - Selection and ordering choices
///
/// # Returns
///
/// * `Ok(Vec<Transaction>)` - the selected records
/// * `Err(OperationsError::InvalidDate)` - sorting was requested and a selected
///   record has no usable date
pub fn process_pipeline(
    records: &[Transaction],
    options: &PipelineOptions,
) -> Result<Vec<Transaction>, OperationsError> {
    let mut selected = match options.status {
        Some(status) => by_status(records, status),
        None => records.to_vec(),
    };
    debug!("{} records after status filter", selected.len());

    if options.currency_only {
        selected = by_currency(&selected, REFERENCE_CURRENCY);
        debug!("{} records after currency filter", selected.len());
    }

    if let Some(keyword) = &options.keyword {
        selected = by_keyword(&selected, keyword);
        debug!("{} records after keyword filter", selected.len());
    }

    match options.sort {
        Some(direction) => sort_by_date(&selected, direction),
        None => Ok(selected),
    }
}
