//! The interactive question sequence

use crate::cli::prompt::{ask_until_valid, parse_yes_no, Prompter};
use crate::core::pipeline::PipelineOptions;
use crate::io::SourceFormat;
use crate::types::{OperationsError, SortDirection, Status};

pub const GREETING: &str = "Welcome to the bank operations viewer.";
pub const FORMAT_QUESTION: &str =
    "Choose the data file:\n  1. JSON file\n  2. CSV file\n  3. Excel file\nYour choice";
pub const STATUS_QUESTION: &str = "Enter the status to filter by (EXECUTED, CANCELED, PENDING)";
pub const SORT_QUESTION: &str = "Sort operations by date? (yes/no)";
pub const DIRECTION_QUESTION: &str = "Sort ascending or descending? (asc/desc)";
pub const RUB_ONLY_QUESTION: &str = "Show only operations in RUB? (yes/no)";
pub const KEYWORD_QUESTION: &str = "Filter by a word in the description? (yes/no)";
pub const KEYWORD_TEXT_QUESTION: &str = "Enter the word to search for";

/// Parse a menu answer: `1`-`3` or a format name
fn parse_format_choice(answer: &str) -> Result<SourceFormat, OperationsError> {
    match answer {
        "1" => Ok(SourceFormat::Json),
        "2" => Ok(SourceFormat::Csv),
        "3" => Ok(SourceFormat::Xlsx),
        other => other
            .parse()
            .map_err(|_| OperationsError::invalid_answer(other)),
    }
}

/// Ask which kind of file to load
pub fn ask_source_format(prompter: &mut dyn Prompter) -> Result<SourceFormat, OperationsError> {
    let format = ask_until_valid(prompter, FORMAT_QUESTION, parse_format_choice)?;
    prompter.tell(&format!("Loading the {} file.", format.to_string().to_uppercase()))?;
    Ok(format)
}

/// Ask for the status filter, ordering, currency and keyword choices
pub fn ask_pipeline_options(
    prompter: &mut dyn Prompter,
) -> Result<PipelineOptions, OperationsError> {
    let status: Status = ask_until_valid(prompter, STATUS_QUESTION, str::parse::<Status>)?;
    prompter.tell(&format!("Operations are filtered by status \"{}\".", status))?;

    let sort = if ask_until_valid(prompter, SORT_QUESTION, parse_yes_no)? {
        Some(ask_until_valid(prompter, DIRECTION_QUESTION, str::parse::<SortDirection>)?)
    } else {
        None
    };

    let currency_only = ask_until_valid(prompter, RUB_ONLY_QUESTION, parse_yes_no)?;

    let keyword = if ask_until_valid(prompter, KEYWORD_QUESTION, parse_yes_no)? {
        Some(prompter.ask(KEYWORD_TEXT_QUESTION)?.trim().to_string())
    } else {
        None
    };

    Ok(PipelineOptions {
        status: Some(status),
        sort,
        currency_only,
        keyword,
    })
}
