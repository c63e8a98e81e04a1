//! Constants used throughout the frobotz console

/// Typed at the text prompt to abandon input without confirming
pub const CANCEL_SENTINEL: &str = ":exit";

/// The only reply that confirms a pending value (compared after lowercasing)
pub const CONFIRM_REPLY: &str = "y";

/// Marker written after every prompt label
pub const PROMPT_MARKER: &str = ": ";

/// Prompt written before reading the menu selection
pub const MENU_PROMPT: &str = "Option: ";

/// Lines written by the confirmable prompt
pub mod messages {
    pub const ENTERED_PREFIX: &str = "You entered: ";
    pub const USE_THIS_VALUE: &str = "Use this value? (y/n): ";
    pub const ONLY_Y_ACCEPTED: &str =
        "You can enter only 'y' or 'Y' to confirm your choice.";
    pub const EXTRA_CHARACTERS: &str =
        "Extra characters in the response aren't recognized.";
    pub const REENTER: &str =
        "Please re-enter your input, or type ':exit' to cancel input.";
}

/// Labels for the values collected by the forms
pub mod labels {
    pub const EMAIL: &str = "\nEmail address (you@example.com)";
    pub const PHONE: &str = "\nPhone number (numbers *only*)";
    pub const SUBSCRIBER_ID: &str = "\nID";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
