//! CSV reader with iterator interface
//!
//! Provides an iterator over raw records of a bank CSV export. Exports come in
//! two dialects: `;`-separated (the bank's own export) and `,`-separated
//! (re-saved from a spreadsheet). The delimiter is detected from the header
//! line.
//!
//! ```no_run
//! use bank_operations::io::csv_reader::CsvReader;
//! use std::path::Path;
//!
//! let reader = CsvReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Read record: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row decoding errors are yielded as Err variants in the iterator,
//!   carrying the line number

use crate::io::record::RawRecord;
use crate::types::OperationsError;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// CSV reader over raw records
#[derive(Debug)]
pub struct CsvReader {
    reader: csv::Reader<Cursor<Vec<u8>>>,
    line_num: u64,
}

impl CsvReader {
    /// Create a new CsvReader from a file path
    ///
    /// The reader is configured to trim whitespace from all fields and to
    /// allow rows with a varying number of fields.
    ///
    /// # Returns
    ///
    /// * `Ok(CsvReader)` if the file was read
    /// * `Err(OperationsError)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, OperationsError> {
        let content = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                OperationsError::file_not_found(&path.display().to_string())
            }
            _ => OperationsError::from(e),
        })?;
        Ok(Self::from_bytes(content))
    }

    /// Create a CsvReader over in-memory content
    pub fn from_bytes(content: Vec<u8>) -> Self {
        // Skip a UTF-8 byte order mark left by spreadsheet software
        let content = match content.strip_prefix(b"\xEF\xBB\xBF") {
            Some(rest) => rest.to_vec(),
            None => content,
        };
        let delimiter = detect_delimiter(&content);

        let reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(Cursor::new(content));

        Self {
            reader,
            line_num: 1,
        }
    }
}

/// Pick `;` when the header line contains one, `,` otherwise
fn detect_delimiter(content: &[u8]) -> u8 {
    let header = content.split(|&byte| byte == b'\n').next().unwrap_or_default();
    if header.contains(&b';') {
        b';'
    } else {
        b','
    }
}

impl Iterator for CsvReader {
    type Item = Result<RawRecord, OperationsError>;

    /// Get the next raw record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(RawRecord))` - Successfully decoded row
    /// * `Some(Err(OperationsError))` - Decoding error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<RawRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(result.map_err(|e| {
            OperationsError::parse_error(
                Some(e.position().map(|pos| pos.line()).unwrap_or(self.line_num)),
                &e.to_string(),
            )
        }))
    }
}
