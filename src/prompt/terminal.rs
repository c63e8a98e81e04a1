//! Line-oriented implementation of the prompt interfaces
//!
//! Works over any `BufRead`/`Write` pair. `LinePrompter::stdio` wires it to the
//! process terminal.

use super::interface::{ConfirmationPrompter, Notifier, TextPrompter};
use crate::{
    constants::messages,
    error::{Error, Result},
};
use std::io::{self, BufRead, Write};

/// Prompts by writing plain text and reading whole lines
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, mainly so tests can inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        Ok(line)
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextPrompter for LinePrompter<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.write_prompt(prompt)?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompter for LinePrompter<R, W> {
    fn prompt_confirmation(&mut self, value: &str) -> Result<String> {
        writeln!(self.output, "{}{value}", messages::ENTERED_PREFIX)?;
        self.write_prompt(messages::USE_THIS_VALUE)?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Notifier for LinePrompter<R, W> {
    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
