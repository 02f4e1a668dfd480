//! XLSX format handling
//!
//! Reads the first worksheet of a workbook. The first row is the header and
//! uses the same column names as the CSV export; every following row becomes
//! one raw record.

use crate::io::dates::from_excel_serial;
use crate::io::record::RawRecord;
use crate::types::OperationsError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Read every data row of the first worksheet
///
/// # Returns
///
/// * `Ok(Vec<Result<RawRecord, OperationsError>>)` - one entry per non-empty row
/// * `Err(OperationsError)` - the workbook is missing, unreadable or has no sheet
pub fn read_xlsx_records(
    path: &Path,
) -> Result<Vec<Result<RawRecord, OperationsError>>, OperationsError> {
    if !path.exists() {
        return Err(OperationsError::file_not_found(&path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| {
        OperationsError::parse_error(None, &format!("failed to open workbook: {}", e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| OperationsError::parse_error(None, "workbook has no worksheets"))?
        .map_err(|e| {
            OperationsError::parse_error(None, &format!("failed to read worksheet: {}", e))
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_string(cell).unwrap_or_default())
        .collect();

    Ok(rows
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|(index, row)| {
            let raw = row_to_raw_record(&headers, row);
            if raw.is_empty() {
                // Header row is row 1
                Err(OperationsError::parse_error(
                    Some(index as u64 + 2),
                    "row has no usable cells",
                ))
            } else {
                Ok(raw)
            }
        })
        .collect())
}

/// Map a worksheet row onto the header names
pub fn row_to_raw_record(headers: &[String], row: &[Data]) -> RawRecord {
    RawRecord::from_pairs(
        headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.as_str(), cell_to_string(cell))),
    )
}

/// Render a cell as text
///
/// Integral floats lose their fraction so ids and whole amounts read as
/// "650703" rather than "650703.0". Date cells become ISO-8601 text.
pub fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(text) => Some(text.trim().to_string()).filter(|text| !text.is_empty()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(format_float(*value)),
        Data::Bool(value) => Some(value.to_string()),
        Data::DateTime(value) => from_excel_serial(value.as_f64())
            .map(|date| date.format("%Y-%m-%dT%H:%M:%S").to_string()),
        Data::DateTimeIso(text) => Some(text.clone()),
        _ => None,
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn headers() -> Vec<String> {
        ["id", "state", "date", "amount", "currency_code", "description"]
            .iter()
            .map(|h| h.to_string())
            .collect()
    }

    #[rstest]
    #[case::text(Data::String(" EXECUTED ".to_string()), Some("EXECUTED"))]
    #[case::blank_text(Data::String("  ".to_string()), None)]
    #[case::int(Data::Int(650703), Some("650703"))]
    #[case::integral_float(Data::Float(16210.0), Some("16210"))]
    #[case::fractional_float(Data::Float(31957.58), Some("31957.58"))]
    #[case::empty(Data::Empty, None)]
    fn test_cell_to_string(#[case] cell: Data, #[case] expected: Option<&str>) {
        assert_eq!(cell_to_string(&cell).as_deref(), expected);
    }

    #[test]
    fn test_row_to_raw_record() {
        let row = vec![
            Data::Float(650703.0),
            Data::String("EXECUTED".to_string()),
            Data::String("2023-09-05T11:30:32Z".to_string()),
            Data::Float(16210.0),
            Data::String("PEN".to_string()),
            Data::String("Перевод организации".to_string()),
        ];

        let raw = row_to_raw_record(&headers(), &row);
        assert_eq!(raw.id.as_deref(), Some("650703"));
        assert_eq!(raw.state.as_deref(), Some("EXECUTED"));
        assert_eq!(raw.amount.as_deref(), Some("16210"));
        assert_eq!(raw.currency_code.as_deref(), Some("PEN"));
    }

    #[test]
    fn test_row_shorter_than_header() {
        let row = vec![Data::Int(1), Data::String("PENDING".to_string())];
        let raw = row_to_raw_record(&headers(), &row);
        assert_eq!(raw.id.as_deref(), Some("1"));
        assert_eq!(raw.state.as_deref(), Some("PENDING"));
        assert_eq!(raw.date, None);
    }

    #[test]
    fn test_read_missing_workbook() {
        let result = read_xlsx_records(Path::new("nonexistent.xlsx"));
        assert!(matches!(result, Err(OperationsError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_garbage_workbook() {
        let file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .expect("Failed to create temp file");
        std::fs::write(file.path(), b"not a zip archive").unwrap();

        let result = read_xlsx_records(file.path());
        assert!(matches!(result, Err(OperationsError::ParseError { .. })));
    }
}
