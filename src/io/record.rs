//! Format-agnostic record conversion
//!
//! Every source format is first decoded into a [`RawRecord`]: a flat bag of
//! optional text fields named after the CSV export columns. This module turns
//! a raw record into a normalized [`Transaction`].
//!
//! Conversion is lenient. A field that fails to parse is dropped (and logged)
//! rather than failing the record; only a record with no fields at all is
//! rejected.

use crate::io::dates::parse_date;
use crate::types::{Money, OperationsError, Status, Transaction, TransactionDate, TransactionId};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Source record before normalization
///
/// Field names follow the CSV export header; `status` and `currency` are
/// accepted as aliases.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "status")]
    pub state: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default, alias = "currency")]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawRecord {
    /// Build a record from header/value pairs
    ///
    /// Header names are matched case-insensitively; unknown columns are ignored.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<String>)>) -> Self {
        let mut record = RawRecord::default();
        for (header, value) in pairs {
            let slot = match header.trim().to_lowercase().as_str() {
                "id" => &mut record.id,
                "state" | "status" => &mut record.state,
                "date" => &mut record.date,
                "amount" => &mut record.amount,
                "currency_name" => &mut record.currency_name,
                "currency_code" | "currency" => &mut record.currency_code,
                "from" => &mut record.from,
                "to" => &mut record.to,
                "description" => &mut record.description,
                _ => continue,
            };
            *slot = value;
        }
        record
    }

    /// Whether every field is absent or blank
    pub fn is_empty(&self) -> bool {
        [
            &self.id,
            &self.state,
            &self.date,
            &self.amount,
            &self.currency_name,
            &self.currency_code,
            &self.from,
            &self.to,
            &self.description,
        ]
        .iter()
        .all(|field| non_blank(field).is_none())
    }
}

/// Convert a RawRecord to a Transaction
///
/// # Arguments
///
/// * `raw` - The decoded source record
///
/// # Returns
///
/// * `Ok(Transaction)` - the normalized record; unparseable fields are absent
/// * `Err(OperationsError)` - the record has no fields at all
pub fn convert_raw_record(raw: RawRecord) -> Result<Transaction, OperationsError> {
    if raw.is_empty() {
        return Err(OperationsError::parse_error(None, "empty record"));
    }

    let id = non_blank(&raw.id).and_then(parse_id);

    let status = non_blank(&raw.state).and_then(|state| match Status::from_str(state) {
        Ok(status) => Some(status),
        Err(_) => {
            warn!("Unknown status '{}' in transaction {:?}", state, id);
            None
        }
    });

    let date = match non_blank(&raw.date) {
        None => TransactionDate::Missing,
        Some(text) => match parse_date(text) {
            Some(value) => TransactionDate::Parsed(value),
            None => {
                warn!("Unparseable date '{}' in transaction {:?}", text, id);
                TransactionDate::Invalid(text.to_string())
            }
        },
    };

    let amount = convert_money(&raw, id);

    Ok(Transaction {
        id,
        status,
        date,
        description: non_blank(&raw.description).map(str::to_string),
        amount,
        from: non_blank(&raw.from).map(str::to_string),
        to: non_blank(&raw.to).map(str::to_string),
    })
}

fn convert_money(raw: &RawRecord, id: Option<TransactionId>) -> Option<Money> {
    let amount_text = non_blank(&raw.amount)?;
    let amount = match parse_amount(amount_text) {
        Some(amount) => amount,
        None => {
            warn!("Invalid amount '{}' in transaction {:?}", amount_text, id);
            return None;
        }
    };

    let Some(currency) = non_blank(&raw.currency_code) else {
        warn!("Amount without currency in transaction {:?}", id);
        return None;
    };

    Some(Money {
        amount,
        currency: currency.to_string(),
        currency_name: non_blank(&raw.currency_name).map(str::to_string),
    })
}

/// Parse a decimal amount, accepting a comma as decimal separator
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_str(&text.replace(',', ".")))
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parse an identifier; spreadsheets hand integers over as "123.0"
fn parse_id(text: &str) -> Option<TransactionId> {
    text.parse::<TransactionId>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|value| value.fract() == 0.0 && *value >= 0.0)
            .map(|value| value as TransactionId)
    })
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn full_record() -> RawRecord {
        RawRecord {
            id: Some("650703".to_string()),
            state: Some("EXECUTED".to_string()),
            date: Some("2023-09-05T11:30:32Z".to_string()),
            amount: Some("16210".to_string()),
            currency_name: Some("Sol".to_string()),
            currency_code: Some("PEN".to_string()),
            from: Some("Счет 58803664561298323391".to_string()),
            to: Some("Счет 39745660563456619397".to_string()),
            description: Some("Перевод организации".to_string()),
        }
    }

    #[test]
    fn test_convert_full_record() {
        let transaction = convert_raw_record(full_record()).unwrap();

        assert_eq!(transaction.id, Some(650703));
        assert_eq!(transaction.status, Some(Status::Executed));
        assert_eq!(
            transaction.date,
            TransactionDate::Parsed(
                NaiveDate::from_ymd_opt(2023, 9, 5)
                    .unwrap()
                    .and_hms_opt(11, 30, 32)
                    .unwrap()
            )
        );
        let money = transaction.amount.unwrap();
        assert_eq!(money.amount, Decimal::new(16210, 0));
        assert_eq!(money.currency, "PEN");
        assert_eq!(money.currency_name.as_deref(), Some("Sol"));
        assert_eq!(transaction.description.as_deref(), Some("Перевод организации"));
    }

    #[test]
    fn test_convert_rejects_empty_record() {
        let raw = RawRecord {
            description: Some("   ".to_string()),
            ..RawRecord::default()
        };
        let result = convert_raw_record(raw);
        assert!(matches!(result, Err(OperationsError::ParseError { .. })));
    }

    #[rstest]
    #[case::unknown_status(RawRecord { state: Some("FAILED".to_string()), ..full_record() })]
    #[case::blank_status(RawRecord { state: Some("".to_string()), ..full_record() })]
    fn test_convert_unknown_status_degrades(#[case] raw: RawRecord) {
        let transaction = convert_raw_record(raw).unwrap();
        assert_eq!(transaction.status, None);
    }

    #[test]
    fn test_convert_keeps_invalid_date_text() {
        let raw = RawRecord {
            date: Some("someday".to_string()),
            ..full_record()
        };
        let transaction = convert_raw_record(raw).unwrap();
        assert_eq!(transaction.date, TransactionDate::Invalid("someday".to_string()));
    }

    #[rstest]
    #[case::invalid_amount(RawRecord { amount: Some("lots".to_string()), ..full_record() })]
    #[case::missing_currency(RawRecord { currency_code: None, ..full_record() })]
    #[case::missing_amount(RawRecord { amount: None, ..full_record() })]
    fn test_convert_drops_unusable_amount(#[case] raw: RawRecord) {
        let transaction = convert_raw_record(raw).unwrap();
        assert_eq!(transaction.amount, None);
    }

    #[rstest]
    #[case("31957.58", Decimal::new(3195758, 2))]
    #[case(" 100 ", Decimal::new(100, 0))]
    #[case("8221,37", Decimal::new(822137, 2))]
    #[case("1e3", Decimal::new(1000, 0))]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input), Some(expected));
    }

    #[rstest]
    #[case("441945886", Some(441945886))]
    #[case("650703.0", Some(650703))]
    #[case("12.5", None)]
    #[case("abc", None)]
    fn test_parse_id(#[case] input: &str, #[case] expected: Option<TransactionId>) {
        assert_eq!(parse_id(input), expected);
    }

    #[test]
    fn test_from_pairs_matches_aliases_and_ignores_unknown() {
        let raw = RawRecord::from_pairs([
            ("Status", Some("pending".to_string())),
            ("currency", Some("usd".to_string())),
            ("Amount", Some("10".to_string())),
            ("comment", Some("ignored".to_string())),
        ]);
        assert_eq!(raw.state.as_deref(), Some("pending"));
        assert_eq!(raw.currency_code.as_deref(), Some("usd"));
        assert_eq!(raw.amount.as_deref(), Some("10"));

        let transaction = convert_raw_record(raw).unwrap();
        assert_eq!(transaction.currency(), Some("usd"));
    }

    #[rstest]
    #[case::lowercase(" rub ", "rub")]
    #[case::mixed("Usd", "Usd")]
    fn test_convert_keeps_currency_code_as_written(#[case] code: &str, #[case] expected: &str) {
        let raw = RawRecord {
            currency_code: Some(code.to_string()),
            ..full_record()
        };
        let transaction = convert_raw_record(raw).unwrap();
        assert_eq!(transaction.currency(), Some(expected));
    }
}
