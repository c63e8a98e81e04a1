use crate::{
    cli::Args,
    error::Result,
    forms::{get_subscriber_info, get_subscription_data},
    menu::{show_splash, MenuOption},
    prompt::{get_prompt_provider, Notifier, PromptHandler, PromptProvider},
};
use serde::Serialize;
use std::fmt::Display;

const LOGIN_HEADING: &str = "\n**          Log in to Data-Frobotz           **";
const SUBSCRIBE_HEADING: &str = "\n**        Subscribe to Data-Frobotz          **";
const UNSUBSCRIBE_HEADING: &str = "\n**      Unsubscribe from Data-Frobotz        **";

/// Main CLI runner that drives one console session
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the session on the process terminal
    pub fn run(self) -> Result<()> {
        self.run_with(get_prompt_provider()).map(|_| ())
    }

    /// Runs the session against `provider` and hands it back when done
    pub fn run_with<P: PromptProvider>(self, provider: P) -> Result<P> {
        let mut handler = PromptHandler::new(provider);

        let selection = match self.args.option {
            Some(option) => {
                log::debug!("Menu option {option} given on the command line");
                Some(option)
            }
            None => show_splash(handler.provider_mut())?,
        };

        match selection {
            Some(MenuOption::Login) => {
                handler.provider_mut().notify(LOGIN_HEADING)?;
                let id = get_subscriber_info(&mut handler)?;
                self.print_result(&mut handler, &id)?;
            }
            Some(MenuOption::Subscribe) => {
                handler.provider_mut().notify(SUBSCRIBE_HEADING)?;
                let data = get_subscription_data(&mut handler)?;
                self.print_result(&mut handler, &data)?;
            }
            Some(MenuOption::Unsubscribe) => {
                handler.provider_mut().notify(UNSUBSCRIBE_HEADING)?;
                let id = get_subscriber_info(&mut handler)?;
                self.print_result(&mut handler, &id)?;
            }
            None => {}
        }

        Ok(handler.into_provider())
    }

    fn print_result<P, T>(&self, handler: &mut PromptHandler<P>, value: &T) -> Result<()>
    where
        P: PromptProvider,
        T: Display + Serialize,
    {
        let line = if self.args.json {
            format!("  {}", serde_json::to_string(value)?)
        } else {
            format!("  {value}")
        };
        handler.provider_mut().notify(&line)
    }
}
