//! Dialoguer-based implementation of the prompt interfaces
//!
//! Used when stdin is an interactive terminal. Values and confirmation replies
//! are both read with `Input<String>` so the handler sees the exact text typed.

use super::interface::{ConfirmationPrompter, Notifier, TextPrompter};
use crate::{
    constants::{messages, PROMPT_MARKER},
    error::Result,
};
use dialoguer::Input;

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Reads one raw line, letting dialoguer render `prompt` with its own marker
    fn read_text(&self, prompt: &str) -> Result<String> {
        let (blank_lines, prompt) = split_leading_newlines(prompt);
        for _ in 0..blank_lines {
            println!();
        }
        Ok(Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text()?)
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Dialoguer draws prompts on a single line, so leading newlines are emitted separately.
fn split_leading_newlines(prompt: &str) -> (usize, &str) {
    let rest = prompt.trim_start_matches('\n');
    (prompt.len() - rest.len(), rest)
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.read_text(prompt.trim_end_matches(PROMPT_MARKER))
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        self.read_text(label)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&mut self, value: &str) -> Result<String> {
        println!("{}{value}", messages::ENTERED_PREFIX);
        self.read_text(messages::USE_THIS_VALUE.trim_end_matches(PROMPT_MARKER))
    }
}

impl Notifier for DialoguerPrompter {
    fn notify(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}
