//! Bank Operations CLI
//!
//! Command-line interface for browsing bank operations from JSON, CSV or
//! Excel exports.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # asks for the file and the filters
//! cargo run -- data/operations.json           # asks for the filters only
//! cargo run -- --non-interactive --status executed --sort desc data/operations.json
//! cargo run -- --non-interactive --format csv --rub-only --search перевод
//! cargo run -- --log-file app.log -vv data/transactions.csv
//! ```
//!
//! The report goes to stdout. Exchange rates are fetched with the `API_KEY`
//! from the environment or `.env`; `--offline` skips the service.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable file, unsortable dates, too many invalid answers, etc.)

use bank_operations::cli::{self, CliArgs, TerminalPrompter};
use bank_operations::{logging, Config, OperationsError};
use log::error;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = execute(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run with logging installed; the log is flushed before returning
fn execute(args: &CliArgs) -> Result<(), OperationsError> {
    let _log_guard = logging::init(&args.to_log_settings())?;
    let config = Config::from_env();

    let mut prompter = TerminalPrompter;
    let mut output = std::io::stdout();
    cli::run(args, &config, &mut prompter, &mut output).inspect_err(|e| error!("{}", e))
}
