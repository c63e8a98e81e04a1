//! Forms collecting subscription details and subscriber ids
//!
//! Each form prints an explanatory box and gathers its fields through the
//! confirmable prompt. A cancelled field is recorded as absent.

use crate::{
    constants::labels,
    error::Result,
    prompt::{Notifier, PromptHandler, PromptProvider},
};
use serde::Serialize;
use std::fmt::Display;

const SUBSCRIPTION_BOX: &[&str] = &[
    ".---------------------------------------------.",
    "| How would you like to subscribe? You can    |",
    "| subscribe with either:                      |",
    "|                                             |",
    "| * your email address                        |",
    "| * your phone number                         |",
    "|                                             |",
    "| Note: your phone must be able to accept SMS |",
    "| messages to subscribe by phone.             |",
    "'---------------------------------------------'",
    "                                               ",
    "Please enter one, or both, of these values now.",
];

const SUBSCRIBER_BOX: &[&str] = &[
    ".---------------------------------------------.",
    "| Enter your subscription id. This can be     |",
    "| either your confirmed email address or sms  |",
    "| phone number.                               |",
    "|                                             |",
    "| Enter ':exit' to cancel.                    |",
    "'---------------------------------------------'",
];

/// Contact details entered on the subscribe form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionData {
    pub email: Option<String>,
    pub sms: Option<String>,
}

impl Display for SubscriptionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "none".to_string());
        write!(f, "email: {}, sms: {}", field(&self.email), field(&self.sms))
    }
}

/// Confirmed email address or phone number identifying a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubscriberId(pub Option<String>);

impl Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_deref().unwrap_or(""))
    }
}

fn print_box<P: PromptProvider>(handler: &mut PromptHandler<P>, lines: &[&str]) -> Result<()> {
    for line in lines {
        handler.provider_mut().notify(line)?;
    }
    Ok(())
}

/// Obtains the operator's email, phone number, or both.
pub fn get_subscription_data<P: PromptProvider>(
    handler: &mut PromptHandler<P>,
) -> Result<SubscriptionData> {
    print_box(handler, SUBSCRIPTION_BOX)?;
    let email = handler.confirm_input(labels::EMAIL)?.into_value();
    let sms = handler.confirm_input(labels::PHONE)?.into_value();
    Ok(SubscriptionData { email, sms })
}

pub fn get_subscriber_info<P: PromptProvider>(
    handler: &mut PromptHandler<P>,
) -> Result<SubscriberId> {
    print_box(handler, SUBSCRIBER_BOX)?;
    Ok(SubscriberId(handler.confirm_input(labels::SUBSCRIBER_ID)?.into_value()))
}
