//! JSON format handling
//!
//! The bank's JSON export is an array of operation objects:
//!
//! ```json
//! {
//!   "id": 441945886,
//!   "state": "EXECUTED",
//!   "date": "2019-08-26T10:50:58.294041",
//!   "operationAmount": {
//!     "amount": "31957.58",
//!     "currency": { "name": "руб.", "code": "RUB" }
//!   },
//!   "description": "Перевод организации",
//!   "from": "Maestro 1596837868705199",
//!   "to": "Счет 64686473678894779589"
//! }
//! ```
//!
//! Flat objects carrying `amount` and `currency_code` at the top level are
//! accepted as well. Elements that are not objects are reported per element;
//! a document that is not an array fails as a whole.

use crate::io::record::RawRecord;
use crate::types::OperationsError;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One element of the JSON export
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonOperation {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, alias = "status")]
    state: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    operation_amount: Option<JsonAmount>,
    #[serde(default)]
    amount: Option<Value>,
    #[serde(default, alias = "currency_code")]
    currency: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct JsonAmount {
    #[serde(default)]
    amount: Option<Value>,
    #[serde(default)]
    currency: Option<JsonCurrency>,
}

#[derive(Debug, Default, Deserialize)]
struct JsonCurrency {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl From<JsonOperation> for RawRecord {
    fn from(operation: JsonOperation) -> Self {
        let (amount, currency_name, currency_code) = match operation.operation_amount {
            Some(nested) => {
                let currency = nested.currency.unwrap_or_default();
                (
                    nested.amount.as_ref().and_then(scalar_to_string),
                    currency.name,
                    currency.code,
                )
            }
            None => (
                operation.amount.as_ref().and_then(scalar_to_string),
                None,
                operation.currency,
            ),
        };

        RawRecord {
            id: operation.id.as_ref().and_then(scalar_to_string),
            state: operation.state,
            date: operation.date,
            amount,
            currency_name,
            currency_code,
            from: operation.from,
            to: operation.to,
            description: operation.description,
        }
    }
}

/// Render a JSON string or number as text; other values are absent
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Read every element of a JSON export file
///
/// # Returns
///
/// * `Ok(Vec<Result<RawRecord, OperationsError>>)` - one entry per array element
/// * `Err(OperationsError)` - the file is missing, unreadable, not JSON, or not an array
pub fn read_json_records(
    path: &Path,
) -> Result<Vec<Result<RawRecord, OperationsError>>, OperationsError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            OperationsError::file_not_found(&path.display().to_string())
        }
        _ => OperationsError::from(e),
    })?;
    parse_json_records(&content)
}

/// Decode a JSON export held in memory
pub fn parse_json_records(
    content: &str,
) -> Result<Vec<Result<RawRecord, OperationsError>>, OperationsError> {
    let document: Value = serde_json::from_str(content)?;
    let Value::Array(elements) = document else {
        return Err(OperationsError::parse_error(
            None,
            "expected a JSON array of operations",
        ));
    };

    Ok(elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value::<JsonOperation>(element)
                .map(RawRecord::from)
                .map_err(|e| {
                    OperationsError::parse_error(
                        None,
                        &format!("operation #{}: {}", index + 1, e),
                    )
                })
        })
        .collect())
}
