//! Report writer
//!
//! Writes the selection header, one block per record, the RUB total and the
//! optional category counts.

use crate::core::categories::{categorize, Category};
use crate::core::resolver::{AmountResolver, ResolvedAmount, Totals};
use crate::core::traits::RateProvider;
use crate::report::formatter::{format_money, TransactionFormatter};
use crate::types::{OperationsError, Transaction, REFERENCE_CURRENCY};
use log::info;
use std::io::Write;

/// Notice printed instead of a report for an empty selection
pub const NO_TRANSACTIONS: &str = "No transactions match the selected filters.";

/// Write the report for `records`
///
/// # Arguments
///
/// * `records` - The selected records, in display order
/// * `resolver` - Resolves amounts for the blocks and the total
/// * `categories` - Categories to count; empty skips the section
/// * `output` - Destination of the report
///
/// # Returns
///
/// * `Ok(())` - the report was written
/// * `Err(OperationsError::IoError)` - writing to `output` failed
pub fn write_report<P: RateProvider>(
    records: &[Transaction],
    resolver: &AmountResolver<P>,
    categories: &[Category],
    output: &mut dyn Write,
) -> Result<(), OperationsError> {
    if records.is_empty() {
        writeln!(output, "{}", NO_TRANSACTIONS)?;
        return Ok(());
    }

    writeln!(output, "Transactions selected: {}", records.len())?;

    let resolved: Vec<ResolvedAmount> = records.iter().map(|t| resolver.resolve(t)).collect();

    let formatter = TransactionFormatter::new(resolver);
    for (transaction, amount) in records.iter().zip(&resolved) {
        writeln!(output)?;
        writeln!(output, "{}", formatter.format_resolved(transaction, amount))?;
    }

    let totals: Totals = resolved.iter().collect();
    info!(
        "Report total {} {}: {} converted, {} not converted, {} without amount",
        totals.total, REFERENCE_CURRENCY, totals.converted, totals.fallback, totals.missing
    );
    writeln!(output)?;
    write!(output, "Total: {} {}", format_money(totals.total), REFERENCE_CURRENCY)?;
    if totals.fallback > 0 {
        write!(output, " ({} not converted)", totals.fallback)?;
    }
    writeln!(output)?;

    let counts = categorize(records, categories);
    if !counts.is_empty() {
        writeln!(output, "Categories:")?;
        for (name, count) in counts {
            writeln!(output, "  {}: {}", name, count)?;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::StaticRates;
    use crate::types::{Money, RateError, TransactionDate};
    use rust_decimal::Decimal;
    use std::cell::Cell;

    /// Provider that counts lookups and has no rates
    #[derive(Default)]
    struct CountingRates {
        calls: Cell<usize>,
    }

    impl RateProvider for CountingRates {
        fn rate(&self, currency: &str) -> Result<Decimal, RateError> {
            self.calls.set(self.calls.get() + 1);
            Err(RateError::rate_not_found(currency))
        }
    }

    fn report(records: &[Transaction], categories: &[Category]) -> String {
        let rates = StaticRates::new().with_rate("USD", Decimal::new(90, 0));
        let resolver = AmountResolver::new(rates);
        let mut output = Vec::new();
        write_report(records, &resolver, categories, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn record(description: &str, amount: i64, currency: &str) -> Transaction {
        Transaction {
            date: TransactionDate::Missing,
            description: Some(description.to_string()),
            amount: Some(Money::new(Decimal::new(amount, 0), currency)),
            ..Transaction::default()
        }
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(report(&[], &[]), format!("{}\n", NO_TRANSACTIONS));
    }

    #[test]
    fn test_report_layout() {
        let records = vec![
            record("Перевод организации", 100, "RUB"),
            record("Открытие вклада", 10, "USD"),
        ];

        assert_eq!(
            report(&records, &[]),
            "Transactions selected: 2\n\
             \n\
             --.--.---- Перевод организации\n\
             Amount: 100.00 RUB\n\
             \n\
             --.--.---- Открытие вклада\n\
             Amount: 900.00 RUB\n\
             \n\
             Total: 1000.00 RUB\n"
        );
    }

    #[test]
    fn test_total_counts_fallbacks() {
        let records = vec![record("Перевод", 100, "RUB"), record("Перевод", 5, "EUR")];
        let output = report(&records, &[]);
        assert!(output.contains("Total: 105.00 RUB (1 not converted)\n"));
    }

    #[test]
    fn test_each_record_is_resolved_once() {
        let provider = CountingRates::default();
        let resolver = AmountResolver::new(&provider);
        let records = vec![record("Перевод", 5, "USD"), record("Перевод", 7, "EUR")];
        let mut output = Vec::new();

        write_report(&records, &resolver, &[], &mut output).unwrap();

        assert_eq!(provider.calls.get(), 2);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Total: 12.00 RUB (2 not converted)\n"));
    }

    #[test]
    fn test_category_section() {
        let records = vec![
            record("Перевод организации", 1, "RUB"),
            record("Перевод частному лицу", 1, "RUB"),
            record("Открытие вклада", 1, "RUB"),
        ];
        let categories = vec![
            Category::new("Transfers", &["перевод"]),
            Category::new("Loans", &["кредит"]),
        ];

        let output = report(&records, &categories);
        assert!(output.ends_with("Categories:\n  Transfers: 2\n"));
    }
}
