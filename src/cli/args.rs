use crate::constants::verbosity;
use crate::menu::{parse_menu_option, MenuOption};
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for frobotz.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print captured values as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip the menu and start the given option (number or name).
    #[arg(long, value_name = "OPTION", value_parser = parse_menu_option)]
    pub option: Option<MenuOption>,
}

/// Parse command line arguments, exiting through clap on invalid input.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
