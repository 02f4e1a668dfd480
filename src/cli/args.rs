use crate::core::categories::Category;
use crate::core::pipeline::PipelineOptions;
use crate::io::SourceFormat;
use crate::logging::LogSettings;
use crate::types::{SortDirection, Status};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Filter, sort and summarize bank operations
#[derive(Parser, Debug)]
#[command(name = "bank-operations")]
#[command(about = "Filter, sort and summarize bank operations from JSON, CSV or Excel files", long_about = None)]
pub struct CliArgs {
    /// Input file; when omitted the format is asked for and the configured
    /// default file is used
    #[arg(value_name = "INPUT", help = "Path to a JSON, CSV or XLSX file")]
    pub input_file: Option<PathBuf>,

    /// Source format, overriding the file extension
    #[arg(long = "format", value_name = "FORMAT", value_parser = parse_format, help = "File format: json, csv or xlsx")]
    pub format: Option<SourceFormat>,

    /// Take every choice from flags instead of asking
    #[arg(long = "non-interactive", help = "Do not ask questions; use the filter flags")]
    pub non_interactive: bool,

    #[arg(long = "status", value_name = "STATUS", value_parser = parse_status, help = "Keep operations with this status: EXECUTED, CANCELED or PENDING")]
    pub status: Option<Status>,

    #[arg(long = "sort", value_name = "DIRECTION", value_parser = parse_sort, help = "Sort by date: asc or desc")]
    pub sort: Option<SortDirection>,

    #[arg(long = "rub-only", help = "Keep only operations in RUB")]
    pub rub_only: bool,

    #[arg(long = "search", value_name = "TEXT", help = "Keep operations whose description contains TEXT")]
    pub search: Option<String>,

    /// Keyword categories for the summary, in priority order
    #[arg(
        long = "category",
        value_name = "NAME=KEYWORDS",
        value_parser = parse_category,
        action = ArgAction::Append,
        help = "Count operations in a category, e.g. Transfers=перевод,transfer (repeatable)"
    )]
    pub categories: Vec<Category>,

    #[arg(long = "offline", help = "Do not contact the exchange-rate service")]
    pub offline: bool,

    #[arg(long = "log-file", value_name = "PATH", help = "Write the log to PATH instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
}

fn parse_format(value: &str) -> Result<SourceFormat, String> {
    value.parse::<SourceFormat>().map_err(|e| e.to_string())
}

fn parse_status(value: &str) -> Result<Status, String> {
    value.parse::<Status>().map_err(|e| e.to_string())
}

fn parse_sort(value: &str) -> Result<SortDirection, String> {
    value.parse::<SortDirection>().map_err(|e| e.to_string())
}

fn parse_category(value: &str) -> Result<Category, String> {
    value.parse::<Category>().map_err(|e| e.to_string())
}

impl CliArgs {
    /// Pipeline options from the filter flags (non-interactive runs)
    pub fn to_pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            status: self.status,
            sort: self.sort,
            currency_only: self.rub_only,
            keyword: self.search.clone(),
        }
    }

    /// Log settings from `-v` and `--log-file`
    pub fn to_log_settings(&self) -> LogSettings {
        LogSettings {
            level: LogSettings::level_for_verbosity(self.verbose),
            file: self.log_file.clone(),
        }
    }
}
