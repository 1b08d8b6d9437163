//! The two interactive menus: the numbered stdin menu and the `dialoguer` selector.

use crate::console::Console;
use crate::error::Result;
use crate::lessons::Lesson;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose to exit, or a one-shot command finished.
    Exited,
    /// The menu could not read a selection.
    InputFailed,
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Run(Lesson),
    Exit,
    Unknown(i64),
}

impl Choice {
    pub fn from_number(number: i64) -> Self {
        match number {
            0 => Choice::Exit,
            n => Lesson::from_number(n).map_or(Choice::Unknown(n), Choice::Run),
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Lessons Menu:".bold())?;
    for lesson in Lesson::ALL {
        writeln!(out, " {}) {}", lesson.number(), lesson.title())?;
    }
    writeln!(out, " 0) Exit")?;
    Ok(())
}

fn say_goodbye<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Bye!".green())?;
    Ok(())
}

/// Numbered menu over the console's input until exit or an unreadable selection.
pub fn run_menu<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<Outcome> {
    loop {
        print_menu(&mut console.out)?;
        console.prompt("Choose: ")?;

        let choice = match console.read_int() {
            Ok(number) => Choice::from_number(number),
            Err(e) if e.is_input() => {
                warn!("Failed to read menu selection: {}", e);
                writeln!(console.err)?;
                writeln!(console.err, "{}", "Input error. Exiting.".red())?;
                return Ok(Outcome::InputFailed);
            },
            Err(e) => return Err(e),
        };

        debug!(?choice, "Menu selection");
        match choice {
            Choice::Run(lesson) => lesson.run(console)?,
            Choice::Exit => {
                say_goodbye(&mut console.out)?;
                return Ok(Outcome::Exited);
            },
            Choice::Unknown(number) => {
                info!("Unknown menu choice {}", number);
                writeln!(console.out, "{}", "Unknown choice.".yellow())?;
            },
        }
    }
}

/// Arrow-key menu drawn by `dialoguer` on the terminal. Cancelling counts as exit.
pub fn run_select_menu<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<Outcome> {
    let mut items: Vec<String> = Lesson::ALL
        .iter()
        .map(|lesson| format!("{}) {}", lesson.number(), lesson.title()))
        .collect();
    items.push("0) Exit".to_string());

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which lesson would you like to run?")
            .items(&items)
            .default(0)
            .interact_opt()? // None on Esc/q
            .unwrap_or(items.len() - 1);

        match Lesson::ALL.get(selection) {
            Some(lesson) => {
                lesson.run(console)?;
                writeln!(console.out)?;
            },
            None => {
                say_goodbye(&mut console.out)?;
                return Ok(Outcome::Exited);
            },
        }
    }
}
