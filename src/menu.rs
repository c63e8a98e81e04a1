//! Banner, main menu and option selection

use crate::{
    constants::MENU_PROMPT,
    error::Result,
    prompt::{trim_input, Notifier, TextPrompter},
};
use std::fmt::Display;

const BANNER: &[&str] = &[
    "#=============================================#",
    "|                                             |",
    "|          Welcome to Data-Frobotz!           |",
    "|                                             |",
    "#---------==========================----------#",
];

const MENU: &[&str] = &[
    "|                                             |",
    "| Choose one of the following options:        |",
    "|                                             |",
    "| 1. login                                    |",
    "| 2. subscribe                                |",
    "| 3. unsubscribe                              |",
    "|                                             |",
    "#=============================================#",
    "                                               ",
    "You can enter either the option number or name ",
    "here. Case is irrelevant (in this case, haha). ",
    "                                               ",
];

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Login,
    Subscribe,
    Unsubscribe,
}

impl MenuOption {
    /// Accepts the option number or name, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match trim_input(input).to_lowercase().as_str() {
            "1" | "login" => Some(MenuOption::Login),
            "2" | "subscribe" => Some(MenuOption::Subscribe),
            "3" | "unsubscribe" => Some(MenuOption::Unsubscribe),
            _ => None,
        }
    }
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MenuOption::Login => "login",
            MenuOption::Subscribe => "subscribe",
            MenuOption::Unsubscribe => "unsubscribe",
        };
        write!(f, "{s}")
    }
}

/// Parser used by clap for `--option`.
pub fn parse_menu_option(input: &str) -> std::result::Result<MenuOption, String> {
    MenuOption::parse(input).ok_or_else(|| {
        format!("unknown option '{input}', expected 1/login, 2/subscribe or 3/unsubscribe")
    })
}

fn write_lines<N: Notifier + ?Sized>(out: &mut N, lines: &[&str]) -> Result<()> {
    for line in lines {
        out.notify(line)?;
    }
    Ok(())
}

pub fn print_banner<N: Notifier + ?Sized>(out: &mut N) -> Result<()> {
    write_lines(out, BANNER)
}

/// Prints the banner and menu, then reads the operator's selection.
///
/// Returns `None` when the selection matches no menu entry.
pub fn show_splash<P>(prompter: &mut P) -> Result<Option<MenuOption>>
where
    P: Notifier + TextPrompter + ?Sized,
{
    print_banner(prompter)?;
    write_lines(prompter, MENU)?;
    let response = prompter.prompt_line(MENU_PROMPT)?;
    let option = MenuOption::parse(&response);
    match option {
        Some(option) => log::debug!("Selected menu option: {option}"),
        None => log::warn!("Unrecognised menu selection {:?}", trim_input(&response)),
    }
    Ok(option)
}
