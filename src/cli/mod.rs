// CLI module
// Command-line parsing, interactive questions and the run itself

mod args;
pub mod app;
pub mod prompt;
pub mod questionnaire;

pub use app::run;
pub use args::CliArgs;
pub use prompt::{Prompter, TerminalPrompter};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the
/// process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
