//! Benchmark suite for the selection pipeline and report rendering
//!
//! Records are generated in memory so the benchmarks measure filtering,
//! sorting, resolution and formatting only, not file decoding.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Each benchmark runs over 100, 1,000 and 10,000 records mixing statuses,
//! currencies and descriptions.

use bank_operations::core::resolver::AmountResolver;
use bank_operations::rates::{CachingRateProvider, StaticRates};
use bank_operations::report::write_report;
use bank_operations::{
    process_pipeline, Money, PipelineOptions, SortDirection, Status, Transaction, TransactionDate,
};
use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

const SIZES: [usize; 3] = [100, 1_000, 10_000];

const DESCRIPTIONS: [&str; 4] = [
    "Перевод организации",
    "Перевод с карты на карту",
    "Открытие вклада",
    "Оплата услуг",
];

/// Deterministic mix of statuses, currencies and dates
fn generate_records(count: usize) -> Vec<Transaction> {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid start date");

    (0..count)
        .map(|i| Transaction {
            id: Some(i as u64),
            status: Some(Status::ALL[i % Status::ALL.len()]),
            date: TransactionDate::Parsed(start + TimeDelta::hours(((i * 7919) % 20_000) as i64)),
            description: Some(DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string()),
            amount: Some(Money::new(
                Decimal::new((i as i64 * 3779) % 1_000_000, 2),
                ["RUB", "RUB", "USD", "EUR"][i % 4],
            )),
            from: Some("Maestro 1596837868705199".to_string()),
            to: Some("Счет 64686473678894779589".to_string()),
        })
        .collect()
}

fn full_options() -> PipelineOptions {
    PipelineOptions {
        status: Some(Status::Executed),
        sort: Some(SortDirection::Descending),
        currency_only: false,
        keyword: Some("перевод".to_string()),
    }
}

/// Benchmark status, keyword and date sort over generated records
#[divan::bench(args = SIZES)]
fn pipeline(bencher: divan::Bencher, count: usize) {
    let options = full_options();
    bencher
        .with_inputs(|| generate_records(count))
        .bench_refs(|records| process_pipeline(records, &options).expect("Pipeline failed"));
}

/// Benchmark rendering the report for every generated record
#[divan::bench(args = SIZES)]
fn report(bencher: divan::Bencher, count: usize) {
    let rates = StaticRates::new()
        .with_rate("USD", Decimal::new(9000, 2))
        .with_rate("EUR", Decimal::new(9800, 2));
    let resolver = AmountResolver::new(CachingRateProvider::new(rates));

    bencher
        .with_inputs(|| generate_records(count))
        .bench_refs(|records| {
            let mut output = Vec::new();
            write_report(records, &resolver, &[], &mut output).expect("Report failed");
            output
        });
}
