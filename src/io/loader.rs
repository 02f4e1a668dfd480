//! Format-agnostic record loading
//!
//! Picks the reader for a file (from an explicit format or the file
//! extension), converts every raw record into a [`Transaction`], and skips
//! malformed records with a warning so one bad row never aborts a run.

use crate::io::csv_reader::CsvReader;
use crate::io::json_format::read_json_records;
use crate::io::record::{convert_raw_record, RawRecord};
use crate::io::xlsx_format::read_xlsx_records;
use crate::types::{OperationsError, Transaction};
use log::{info, warn};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported source file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
    Xlsx,
}

impl SourceFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, OperationsError> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(|extension| extension.parse().ok())
            .ok_or_else(|| OperationsError::unsupported_format(&path.display().to_string()))
    }
}

impl FromStr for SourceFormat {
    type Err = OperationsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xls" | "excel" => Ok(SourceFormat::Xlsx),
            _ => Err(OperationsError::unsupported_format(value)),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceFormat::Json => "json",
            SourceFormat::Csv => "csv",
            SourceFormat::Xlsx => "xlsx",
        })
    }
}

/// Load and normalize all records of a file
///
/// # Arguments
///
/// * `path` - Path to the source file
/// * `format` - Explicit format; detected from the extension when `None`
///
/// # Returns
///
/// * `Ok(Vec<Transaction>)` - the records that could be decoded, in file order
/// * `Err(OperationsError)` - the file cannot be read at all
pub fn load_records(
    path: &Path,
    format: Option<SourceFormat>,
) -> Result<Vec<Transaction>, OperationsError> {
    let format = match format {
        Some(format) => format,
        None => SourceFormat::from_path(path)?,
    };

    let raw_records: Vec<Result<RawRecord, OperationsError>> = match format {
        SourceFormat::Json => read_json_records(path)?,
        SourceFormat::Csv => CsvReader::new(path)?.collect(),
        SourceFormat::Xlsx => read_xlsx_records(path)?,
    };

    let total = raw_records.len();
    let transactions: Vec<Transaction> = raw_records
        .into_iter()
        .filter_map(|result| match result.and_then(convert_raw_record) {
            Ok(transaction) => Some(transaction),
            Err(e) => {
                warn!("Skipping record in {}: {}", path.display(), e);
                None
            }
        })
        .collect();

    info!(
        "Loaded {} of {} records from {} ({})",
        transactions.len(),
        total,
        path.display(),
        format
    );
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::{process_pipeline, PipelineOptions};
    use crate::types::{Status, TransactionDate};
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[rstest]
    #[case("operations.json", SourceFormat::Json)]
    #[case("transactions.CSV", SourceFormat::Csv)]
    #[case("data/transactions_excel.xlsx", SourceFormat::Xlsx)]
    fn test_format_from_path(#[case] path: &str, #[case] expected: SourceFormat) {
        assert_eq!(SourceFormat::from_path(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("transactions.txt")]
    #[case("transactions")]
    fn test_format_from_path_rejects(#[case] path: &str) {
        let result = SourceFormat::from_path(Path::new(path));
        assert!(matches!(
            result,
            Err(OperationsError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_json_skips_empty_objects() {
        let file = create_temp_file(
            ".json",
            r#"[
                {"id": 1, "state": "EXECUTED", "date": "2019-08-26T10:50:58.294041",
                 "operationAmount": {"amount": "100", "currency": {"code": "RUB"}},
                 "description": "Открытие вклада", "to": "Счет 64686473678894779589"},
                {},
                {"id": 2, "state": "CANCELED", "date": "2018-06-30T02:08:58.425572",
                 "operationAmount": {"amount": "9824.07", "currency": {"code": "USD"}},
                 "description": "Перевод организации"}
            ]"#,
        );

        let records = load_records(file.path(), None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[1].status, Some(Status::Canceled));
        assert_eq!(records[1].currency(), Some("USD"));
    }

    #[test]
    fn test_load_csv_with_explicit_format() {
        let file = create_temp_file(
            ".txt",
            "id;state;date;amount;currency_code;description\n\
             5;PENDING;01.01.2020;10;RUB;Оплата\n",
        );

        let records = load_records(file.path(), Some(SourceFormat::Csv)).unwrap();
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0].date, TransactionDate::Parsed(_)));
    }

    #[test]
    fn test_loaded_currency_code_stays_case_sensitive() {
        let file = create_temp_file(
            ".csv",
            "id;state;date;amount;currency_code;description\n\
             1;EXECUTED;01.01.2020;10;rub;x\n\
             2;EXECUTED;02.01.2020;20;RUB;y\n",
        );

        let records = load_records(file.path(), None).unwrap();
        assert_eq!(records[0].currency(), Some("rub"));

        let options = PipelineOptions {
            currency_only: true,
            ..PipelineOptions::default()
        };
        let kept = process_pipeline(&records, &options).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, Some(2));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_records(Path::new("missing.csv"), None);
        assert!(matches!(result, Err(OperationsError::FileNotFound { .. })));
    }
}
