//! # Input Interpreter
//!
//! Turns one line of user input into a `Command`, given the screen the user
//! is looking at. This is pure: it reads the catalog to check codes but
//! never changes anything. `action::update` decides what a command does.
//!
//! | Screen       | Accepted input                                   |
//! |--------------|--------------------------------------------------|
//! | any          | `99` exit                                        |
//! | Catalog      | code, `i <code>`, `n`, `b`, `h`, empty           |
//! | Help         | `b` / empty back, `p` execution policy           |
//! | Confirm      | `y` / empty yes, `n` no                          |
//! | Choose       | `1..=options`, `b` cancel                        |

use crate::core::catalog::Catalog;

/// The screen an input line is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Help,
    Catalog(u8),
    Confirm,
    Choose { options: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    OpenHelp,
    /// `h` typed inside a yes/no or multi-choice prompt.
    HelpBlocked,
    /// `i` typed without a code.
    InfoUsage,
    NextPage,
    PreviousPage,
    Select(String),
    Info(String),
    Back,
    ElevatePolicy,
    Answer(bool),
    Choose(usize),
    Cancel,
    Nothing,
    Unknown(String),
}

pub fn interpret(screen: Screen, input: &str, catalog: &Catalog) -> Command {
    let choose = input.trim().to_lowercase();

    if choose == "99" {
        return Command::Exit;
    }

    if choose == "h" && screen != Screen::Help {
        return match screen {
            Screen::Confirm | Screen::Choose { .. } => Command::HelpBlocked,
            _ => Command::OpenHelp,
        };
    }

    match screen {
        Screen::Help => match choose.as_str() {
            "b" | "" => Command::Back,
            "p" => Command::ElevatePolicy,
            _ => Command::Unknown(choose),
        },
        Screen::Catalog(page) => interpret_catalog(page, choose, catalog),
        Screen::Confirm => match choose.as_str() {
            "y" | "" => Command::Answer(true),
            "n" => Command::Answer(false),
            _ => Command::Unknown(choose),
        },
        Screen::Choose { options } => {
            if choose == "b" {
                return Command::Cancel;
            }
            match choose.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options => Command::Choose(n - 1),
                _ => Command::Unknown(choose),
            }
        }
    }
}

fn interpret_catalog(page: u8, choose: String, catalog: &Catalog) -> Command {
    match choose.as_str() {
        "" => Command::Nothing,
        "i" => Command::InfoUsage,
        "n" => Command::NextPage,
        "b" => Command::PreviousPage,
        _ => {
            if let Some(tool) = catalog.lookup(&choose, page) {
                return Command::Select(tool.code.clone());
            }
            if let Some(code) = choose.strip_prefix("i ")
                && let Some(tool) = catalog.lookup(code.trim(), page)
            {
                return Command::Info(tool.code.clone());
            }
            Command::Unknown(choose)
        }
    }
}

/// Page after `page`, wrapping from the last page to the first.
pub fn next_page(page: u8, page_count: u8) -> u8 {
    if page >= page_count { 1 } else { page + 1 }
}

/// Page before `page`, wrapping from the first page to the last.
pub fn previous_page(page: u8, page_count: u8) -> u8 {
    if page <= 1 { page_count } else { page - 1 }
}
