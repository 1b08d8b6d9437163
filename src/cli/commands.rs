use super::menu::{self, Outcome};
use crate::console::{Console, StdConsole};
use crate::error::{AppError, Result};
use crate::lessons::Lesson;
use clap::{Args, Parser, Subcommand};
use colored::*;
use comfy_table::Table;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Small lessons on basic language mechanics, picked from a menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also write logs to a daily-rolling `lessons.log` in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the lesson menu (the default when no command is given)
    Menu(MenuArgs),

    /// Run a single lesson and exit
    Run(RunArgs),

    /// List the available lessons
    List,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Menu(MenuArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct MenuArgs {
    /// Pick lessons with the arrow keys instead of typing numbers
    #[arg(long)]
    pub select: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Lesson number (1-9)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
    pub lesson: u8,
}

/// CLI application
pub struct App<R, W, E> {
    console: Console<R, W, E>,
}

impl
    App<
        std::io::StdinLock<'static>,
        std::io::StdoutLock<'static>,
        std::io::StderrLock<'static>,
    >
{
    /// Application bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(StdConsole::stdio())
    }
}

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    pub fn new(console: Console<R, W, E>) -> Self {
        Self { console }
    }

    /// Run the CLI application
    pub fn run(&mut self, command: Commands) -> Result<Outcome> {
        match command {
            Commands::Menu(args) => {
                writeln!(
                    self.console.out,
                    "{}",
                    "Welcome to the Lessons CLI!".cyan().bold()
                )?;
                if args.select {
                    menu::run_select_menu(&mut self.console)
                } else {
                    menu::run_menu(&mut self.console)
                }
            },
            Commands::Run(args) => {
                self.run_lesson(i64::from(args.lesson))?;
                Ok(Outcome::Exited)
            },
            Commands::List => {
                self.list_lessons()?;
                Ok(Outcome::Exited)
            },
        }
    }

    /// Run one lesson by number
    fn run_lesson(&mut self, number: i64) -> Result<()> {
        let lesson = Lesson::from_number(number).ok_or(AppError::OutOfRange {
            value: number,
            min: 1,
            max: Lesson::ALL.len() as i64,
        })?;
        info!("Running lesson {} from the command line", number);
        lesson.run(&mut self.console)
    }

    /// Print the lesson catalogue as a table
    fn list_lessons(&mut self) -> Result<()> {
        let mut table = Table::new();
        table.set_header(vec!["#", "Lesson", "What it shows"]);
        for lesson in Lesson::ALL {
            table.add_row(vec![
                lesson.number().to_string(),
                lesson.title().to_string(),
                lesson.summary().to_string(),
            ]);
        }
        writeln!(self.console.out, "{}", table)?;
        Ok(())
    }
}
