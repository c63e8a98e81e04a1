pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args};
pub use runner::Runner;

/// Runs one console session with the given arguments.
pub fn run(args: Args) -> crate::error::Result<()> {
    Runner::new(args).run()
}
