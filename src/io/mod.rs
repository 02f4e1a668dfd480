//! I/O module
//!
//! Turns source files into normalized transactions.
//!
//! # Components
//!
//! - `record` - Raw record type and conversion to [`crate::types::Transaction`]
//! - `dates` - Date normalization for all supported textual and serial formats
//! - `csv_reader` - CSV reader with iterator interface
//! - `json_format` - JSON export decoding
//! - `xlsx_format` - Spreadsheet decoding
//! - `loader` - Format selection and lenient loading

pub mod csv_reader;
pub mod dates;
pub mod json_format;
pub mod loader;
pub mod record;
pub mod xlsx_format;

pub use csv_reader::CsvReader;
pub use loader::{load_records, SourceFormat};
pub use record::{convert_raw_record, RawRecord};
