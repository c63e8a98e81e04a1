//! The confirmable prompt loop
//!
//! Reads a value, shows it back, and only hands it to the caller once the
//! operator answers with exactly `y`. Typing the cancellation sentinel at the
//! value step abandons the prompt.

use super::{interface::PromptProvider, trim_input};
use crate::{
    constants::{messages, CANCEL_SENTINEL, CONFIRM_REPLY},
    error::Result,
};

/// Result of a confirmable prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted(String),
    Cancelled,
}

impl PromptOutcome {
    /// The accepted value, or `None` when the prompt was cancelled.
    pub fn into_value(self) -> Option<String> {
        match self {
            PromptOutcome::Accepted(value) => Some(value),
            PromptOutcome::Cancelled => None,
        }
    }
}

/// How a confirmation reply was understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Confirm,
    /// Starts with `y` but carries more characters, e.g. `yes`.
    ExtraCharacters,
    Decline,
}

impl Reply {
    /// Classifies a raw reply after trimming and lowercasing it.
    pub fn classify(raw: &str) -> Self {
        let reply = trim_input(raw).to_lowercase();
        if reply == CONFIRM_REPLY {
            Reply::Confirm
        } else if reply.starts_with(CONFIRM_REPLY) {
            Reply::ExtraCharacters
        } else {
            Reply::Decline
        }
    }
}

enum State {
    AwaitingText,
    AwaitingConfirmation(String),
}

/// Drives the confirmable prompt against a prompt provider
pub struct PromptHandler<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> PromptHandler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Asks for a value under `label` until it is confirmed or cancelled.
    pub fn confirm_input(&mut self, label: &str) -> Result<PromptOutcome> {
        let mut state = State::AwaitingText;
        loop {
            state = match state {
                State::AwaitingText => {
                    let text = trim_input(&self.provider.prompt_text(label)?).to_string();
                    if text == CANCEL_SENTINEL {
                        log::info!("Input cancelled at prompt {:?}", label.trim());
                        return Ok(PromptOutcome::Cancelled);
                    }
                    State::AwaitingConfirmation(text)
                }
                State::AwaitingConfirmation(text) => {
                    let raw = self.provider.prompt_confirmation(&text)?;
                    match Reply::classify(&raw) {
                        Reply::Confirm => return Ok(PromptOutcome::Accepted(text)),
                        Reply::ExtraCharacters => {
                            log::debug!("Rejected confirmation reply {:?}", trim_input(&raw));
                            self.provider.notify(messages::ONLY_Y_ACCEPTED)?;
                            self.provider.notify(messages::EXTRA_CHARACTERS)?;
                        }
                        Reply::Decline => {
                            log::debug!("Declined value {text:?}");
                            self.provider.notify(messages::REENTER)?;
                        }
                    }
                    State::AwaitingText
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::prompt::interface::{ConfirmationPrompter, Notifier, TextPrompter};
    use std::collections::VecDeque;

    /// Mock provider fed from a script of lines
    struct MockPrompter {
        lines: VecDeque<String>,
        labels: Vec<String>,
        echoed: Vec<String>,
        notices: Vec<String>,
    }

    impl MockPrompter {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                labels: Vec::new(),
                echoed: Vec::new(),
                notices: Vec::new(),
            }
        }

        fn next(&mut self) -> Result<String> {
            self.lines.pop_front().ok_or(Error::EndOfInput)
        }
    }

    impl TextPrompter for MockPrompter {
        fn prompt_line(&mut self, prompt: &str) -> Result<String> {
            self.labels.push(prompt.to_string());
            self.next()
        }
    }

    impl ConfirmationPrompter for MockPrompter {
        fn prompt_confirmation(&mut self, value: &str) -> Result<String> {
            self.echoed.push(value.to_string());
            self.next()
        }
    }

    impl Notifier for MockPrompter {
        fn notify(&mut self, message: &str) -> Result<()> {
            self.notices.push(message.to_string());
            Ok(())
        }
    }

    fn run(lines: &[&str]) -> (Result<PromptOutcome>, MockPrompter) {
        let mut handler = PromptHandler::new(MockPrompter::new(lines));
        let outcome = handler.confirm_input("Email");
        (outcome, handler.into_provider())
    }

    #[test]
    fn classifies_replies() {
        assert_eq!(Reply::classify("y"), Reply::Confirm);
        assert_eq!(Reply::classify("  Y \n"), Reply::Confirm);
        assert_eq!(Reply::classify("yes"), Reply::ExtraCharacters);
        assert_eq!(Reply::classify("Yup"), Reply::ExtraCharacters);
        assert_eq!(Reply::classify("n"), Reply::Decline);
        assert_eq!(Reply::classify("maybe"), Reply::Decline);
        assert_eq!(Reply::classify(""), Reply::Decline);
    }

    #[test]
    fn accepts_confirmed_value() {
        let (outcome, mock) = run(&["me@example.com", "y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted("me@example.com".into()));
        assert_eq!(mock.labels, vec!["Email: "]);
        assert!(mock.notices.is_empty());
    }

    #[test]
    fn sentinel_cancels_without_confirmation() {
        let (outcome, mock) = run(&[":exit"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Cancelled);
        assert!(mock.echoed.is_empty());
    }

    #[test]
    fn sentinel_cancels_after_rejections() {
        let (outcome, mock) = run(&["a", "n", "b", "yes", "  :exit  "]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Cancelled);
        assert_eq!(mock.echoed, vec!["a", "b"]);
        assert_eq!(mock.labels, vec!["Email: "; 3]);
    }

    #[test]
    fn extra_characters_reprompts() {
        let (outcome, mock) = run(&["555-1234", "yes", "555-1234", "y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted("555-1234".into()));
        assert_eq!(
            mock.notices,
            vec![messages::ONLY_Y_ACCEPTED, messages::EXTRA_CHARACTERS]
        );
        assert_eq!(mock.labels.len(), 2);
    }

    #[test]
    fn decline_reprompts_with_generic_message() {
        let (outcome, mock) = run(&["first", "maybe", "second", "Y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted("second".into()));
        assert_eq!(mock.notices, vec![messages::REENTER]);
    }

    #[test]
    fn trims_before_echo_and_return() {
        let (outcome, mock) = run(&["   padded value \t", "y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted("padded value".into()));
        assert_eq!(mock.echoed, vec!["padded value"]);
    }

    #[test]
    fn sentinel_is_matched_exactly() {
        let (outcome, _) = run(&[":EXIT", "y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted(":EXIT".into()));
    }

    #[test]
    fn non_ascii_space_is_kept() {
        let (outcome, mock) = run(&["\u{a0}:exit", "y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted("\u{a0}:exit".into()));
        assert_eq!(mock.echoed, vec!["\u{a0}:exit"]);

        let (outcome, mock) = run(&["a", "\u{a0}y", "b", "y"]);
        assert_eq!(outcome.unwrap(), PromptOutcome::Accepted("b".into()));
        assert_eq!(mock.notices, vec![messages::REENTER]);
    }

    #[test]
    fn end_of_input_propagates() {
        let (outcome, _) = run(&["value"]);
        assert!(matches!(outcome, Err(Error::EndOfInput)));
    }

    #[test]
    fn outcome_into_value() {
        assert_eq!(PromptOutcome::Accepted("x".into()).into_value(), Some("x".into()));
        assert_eq!(PromptOutcome::Cancelled.into_value(), None);
    }
}
