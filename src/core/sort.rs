//! Date sort
//!
//! Orders records by their normalized date. The sort is stable in both
//! directions: records with equal dates keep their input order.

use crate::types::{OperationsError, SortDirection, Transaction, TransactionDate};
use chrono::NaiveDateTime;

/// Sort records by date
///
/// # Arguments
///
/// * `records` - Records to sort; not modified
/// * `direction` - Oldest first (`Ascending`) or newest first (`Descending`)
///
/// # Returns
///
/// * `Ok(Vec<Transaction>)` - the sorted copy
/// * `Err(OperationsError::InvalidDate)` - a record has an invalid or missing
///   date and cannot be placed in the order; names the first such record
pub fn sort_by_date(
    records: &[Transaction],
    direction: SortDirection,
) -> Result<Vec<Transaction>, OperationsError> {
    let mut keyed: Vec<(NaiveDateTime, &Transaction)> = records
        .iter()
        .map(|transaction| match &transaction.date {
            TransactionDate::Parsed(date) => Ok((*date, transaction)),
            TransactionDate::Invalid(text) => {
                Err(OperationsError::invalid_date(transaction.id, text))
            }
            TransactionDate::Missing => Err(OperationsError::invalid_date(transaction.id, "")),
        })
        .collect::<Result<_, _>>()?;

    // sort_by is stable; reversing the comparator keeps ties in input order
    match direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    Ok(keyed
        .into_iter()
        .map(|(_, transaction)| transaction.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dates::parse_date;
    use rstest::rstest;

    fn dated(id: u64, date: &str) -> Transaction {
        Transaction {
            id: Some(id),
            date: TransactionDate::Parsed(parse_date(date).unwrap()),
            ..Transaction::default()
        }
    }

    fn ids(records: &[Transaction]) -> Vec<u64> {
        records.iter().filter_map(|t| t.id).collect()
    }

    fn distinct() -> Vec<Transaction> {
        vec![
            dated(1, "26.08.2019"),
            dated(2, "2018-07-03T18:35:29.512364"),
            dated(3, "30.06.2018"),
            dated(4, "2019-07-03T18:35:29"),
        ]
    }

    #[rstest]
    #[case(SortDirection::Ascending, vec![3, 2, 4, 1])]
    #[case(SortDirection::Descending, vec![1, 4, 2, 3])]
    fn test_sort_by_date(#[case] direction: SortDirection, #[case] expected: Vec<u64>) {
        let sorted = sort_by_date(&distinct(), direction).unwrap();
        assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let mut ascending = sort_by_date(&distinct(), SortDirection::Ascending).unwrap();
        let descending = sort_by_date(&distinct(), SortDirection::Descending).unwrap();
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[rstest]
    #[case(SortDirection::Ascending, vec![2, 1, 3, 4])]
    #[case(SortDirection::Descending, vec![4, 1, 3, 2])]
    fn test_sort_is_stable(#[case] direction: SortDirection, #[case] expected: Vec<u64>) {
        let records = vec![
            dated(1, "02.01.2020"),
            dated(2, "01.01.2020"),
            dated(3, "02.01.2020"),
            dated(4, "03.01.2020"),
        ];
        let sorted = sort_by_date(&records, direction).unwrap();
        assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn test_sort_does_not_modify_input() {
        let records = distinct();
        let _ = sort_by_date(&records, SortDirection::Ascending).unwrap();
        assert_eq!(records, distinct());
    }

    #[rstest]
    #[case::invalid(TransactionDate::Invalid("someday".to_string()), "someday")]
    #[case::missing(TransactionDate::Missing, "")]
    fn test_sort_rejects_unsortable_date(#[case] date: TransactionDate, #[case] value: &str) {
        let mut records = distinct();
        records.insert(
            1,
            Transaction {
                id: Some(99),
                date,
                ..Transaction::default()
            },
        );

        let result = sort_by_date(&records, SortDirection::Ascending);
        assert_eq!(
            result,
            Err(OperationsError::InvalidDate {
                id: Some(99),
                value: value.to_string()
            })
        );
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_by_date(&[], SortDirection::Descending).unwrap().is_empty());
    }
}
