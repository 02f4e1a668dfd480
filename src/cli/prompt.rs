//! Terminal questions with bounded re-prompting

use crate::types::OperationsError;
use dialoguer::{theme::ColorfulTheme, Input};
use log::warn;
use std::io::Write;

/// How many answers a question accepts before giving up
pub const MAX_ATTEMPTS: usize = 3;

/// A line-oriented conversation with the user
pub trait Prompter {
    /// Ask a question and return the raw answer
    fn ask(&mut self, question: &str) -> Result<String, OperationsError>;

    /// Show a message that needs no answer
    fn tell(&mut self, message: &str) -> Result<(), OperationsError>;
}

/// [`Prompter`] on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String, OperationsError> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(OperationsError::prompt)
    }

    fn tell(&mut self, message: &str) -> Result<(), OperationsError> {
        writeln!(std::io::stdout(), "{}", message)?;
        Ok(())
    }
}

/// Ask until `parse` accepts the answer
///
/// Each rejected answer is reported back to the user before asking again.
///
/// # Returns
///
/// * `Ok(T)` - the first accepted answer
/// * `Err(OperationsError::TooManyAttempts)` - [`MAX_ATTEMPTS`] answers were rejected
/// * `Err(_)` - the prompter itself failed
pub fn ask_until_valid<T, F>(
    prompter: &mut dyn Prompter,
    question: &str,
    parse: F,
) -> Result<T, OperationsError>
where
    F: Fn(&str) -> Result<T, OperationsError>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let answer = prompter.ask(question)?;
        match parse(answer.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Rejected answer {} of {}: {}", attempt, MAX_ATTEMPTS, e);
                prompter.tell(&e.to_string())?;
            }
        }
    }

    Err(OperationsError::TooManyAttempts {
        question: question.to_string(),
        attempts: MAX_ATTEMPTS,
    })
}

/// Parse a yes/no answer in English or Russian
pub fn parse_yes_no(answer: &str) -> Result<bool, OperationsError> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" | "да" | "д" => Ok(true),
        "no" | "n" | "нет" | "н" => Ok(false),
        _ => Err(OperationsError::invalid_answer(answer)),
    }
}
