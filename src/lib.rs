/// Handles argument parsing and session orchestration.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Subscription and subscriber-id forms.
pub mod forms;

/// Banner, menu and option selection.
pub mod menu;

/// User input and interaction handling.
pub mod prompt;
