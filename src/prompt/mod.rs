//! Interactive prompting for user input
//!
//! The module is structured in layers:
//! - `interface`: abstract prompt operations independent of any terminal
//! - `dialoguer`: implementation backed by the dialoguer library
//! - `terminal`: line-oriented implementation over any reader/writer pair
//! - `handler`: the confirmable prompt loop built on top of the interfaces

use crate::error::Result;
use std::io::{self, IsTerminal};

pub mod dialoguer;
pub mod handler;
pub mod interface;
pub mod terminal;

pub use self::dialoguer::DialoguerPrompter;
pub use handler::{PromptHandler, PromptOutcome, Reply};
pub use interface::*;
pub use terminal::LinePrompter;

/// Trims what the operator typed: ASCII whitespace, vertical tab and NUL only.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b' || c == '\0')
}

/// Provider for the process terminal
pub enum TerminalPrompter {
    /// stdin is an interactive terminal
    Interactive(DialoguerPrompter),
    /// stdin is piped or redirected
    Piped(LinePrompter<io::StdinLock<'static>, io::Stdout>),
}

impl TextPrompter for TerminalPrompter {
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        match self {
            TerminalPrompter::Interactive(p) => p.prompt_line(prompt),
            TerminalPrompter::Piped(p) => p.prompt_line(prompt),
        }
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        match self {
            TerminalPrompter::Interactive(p) => p.prompt_text(label),
            TerminalPrompter::Piped(p) => p.prompt_text(label),
        }
    }
}

impl ConfirmationPrompter for TerminalPrompter {
    fn prompt_confirmation(&mut self, value: &str) -> Result<String> {
        match self {
            TerminalPrompter::Interactive(p) => p.prompt_confirmation(value),
            TerminalPrompter::Piped(p) => p.prompt_confirmation(value),
        }
    }
}

impl Notifier for TerminalPrompter {
    fn notify(&mut self, message: &str) -> Result<()> {
        match self {
            TerminalPrompter::Interactive(p) => p.notify(message),
            TerminalPrompter::Piped(p) => p.notify(message),
        }
    }
}

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> TerminalPrompter {
    if io::stdin().is_terminal() {
        log::debug!("Using dialoguer prompts");
        TerminalPrompter::Interactive(DialoguerPrompter::new())
    } else {
        log::debug!("stdin is not a terminal, reading plain lines");
        TerminalPrompter::Piped(LinePrompter::stdio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ascii_whitespace_and_nul() {
        assert_eq!(trim_input(" \t:exit\r\n"), ":exit");
        assert_eq!(trim_input("\0y\x0b"), "y");
        assert_eq!(trim_input("\u{a0}:exit"), "\u{a0}:exit");
        assert_eq!(trim_input("y\u{2003}"), "y\u{2003}");
    }
}
