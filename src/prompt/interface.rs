//! Pure interfaces for prompting without a concrete terminal
//!
//! The confirmable prompt only talks to these traits, so the same loop runs
//! against the real terminal and against in-memory buffers in tests.

use crate::{constants::PROMPT_MARKER, error::Result};

/// Reads raw lines typed after a prompt
pub trait TextPrompter {
    /// Writes `prompt` verbatim, then returns the next line untrimmed.
    fn prompt_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes `label` followed by the prompt marker and reads the value.
    fn prompt_text(&mut self, label: &str) -> Result<String> {
        self.prompt_line(&format!("{label}{PROMPT_MARKER}"))
    }
}

/// Echoes a pending value and reads the raw yes/no reply
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&mut self, value: &str) -> Result<String>;
}

/// Writes informational lines to the operator
pub trait Notifier {
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Combined interface that provides all prompt operations
pub trait PromptProvider: TextPrompter + ConfirmationPrompter + Notifier {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + ConfirmationPrompter + Notifier {}
