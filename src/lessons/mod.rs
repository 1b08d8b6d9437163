//! The nine lessons and the catalogue that numbers them.
//!
//! Each lesson is a self-contained demonstration: it builds its own local data,
//! writes what it observes to the console, and keeps nothing once it returns.
//! Local failures (bad factorial input, a refused allocation) are reported on the
//! console's error stream and swallowed; only I/O errors on the console itself
//! propagate.

mod arrays;
mod control;
mod factorial;
mod functions;
mod hello;
mod memory;
mod strings;
mod structs;
mod types;

use crate::console::Console;
use crate::error::Result;
use colored::*;
use std::io::{BufRead, Write};
use tracing::info;

/// A lesson selectable from the menu. Discriminants are the menu numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    Hello = 1,
    Types = 2,
    Control = 3,
    Functions = 4,
    ArraysPointers = 5,
    Strings = 6,
    DynamicMemory = 7,
    Structs = 8,
    Factorial = 9,
}

impl Lesson {
    /// All lessons in menu order.
    pub const ALL: [Lesson; 9] = [
        Lesson::Hello,
        Lesson::Types,
        Lesson::Control,
        Lesson::Functions,
        Lesson::ArraysPointers,
        Lesson::Strings,
        Lesson::DynamicMemory,
        Lesson::Structs,
        Lesson::Factorial,
    ];

    /// Looks up a lesson by its menu number.
    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.number() == number)
    }

    pub fn number(self) -> i64 {
        self as i64
    }

    pub fn title(self) -> &'static str {
        match self {
            Lesson::Hello => "Hello",
            Lesson::Types => "Types & sizes",
            Lesson::Control => "Control & loops",
            Lesson::Functions => "Functions & swap",
            Lesson::ArraysPointers => "Arrays & pointers",
            Lesson::Strings => "Strings & strlen",
            Lesson::DynamicMemory => "Dynamic memory",
            Lesson::Structs => "Structs & layout",
            Lesson::Factorial => "Factorial (interactive)",
        }
    }

    /// One line on what the lesson shows, used by `list`.
    pub fn summary(self) -> &'static str {
        match self {
            Lesson::Hello => "Print a greeting",
            Lesson::Types => "Primitive values and their byte sizes",
            Lesson::Control => "Even/odd test and a counted loop",
            Lesson::Functions => "Swap two locals through mutable references",
            Lesson::ArraysPointers => "Indexing versus raw pointer offsets",
            Lesson::Strings => "Concatenate into a fixed buffer, hand-written strlen",
            Lesson::DynamicMemory => "Fallible allocate, grow, release",
            Lesson::Structs => "A C-layout record and its size",
            Lesson::Factorial => "Read n in 0..=20 and print n!",
        }
    }

    /// Runs the lesson against `console`.
    pub fn run<R: BufRead, W: Write, E: Write>(self, console: &mut Console<R, W, E>) -> Result<()> {
        info!(lesson = self.number(), title = self.title(), "Running lesson");
        writeln!(
            console.out,
            "{}",
            format!("== Lesson {}: {} ==", self.number(), self.title()).cyan()
        )?;
        match self {
            Lesson::Hello => hello::run(&mut console.out),
            Lesson::Types => types::run(&mut console.out),
            Lesson::Control => control::run(&mut console.out),
            Lesson::Functions => functions::run(&mut console.out),
            Lesson::ArraysPointers => arrays::run(&mut console.out),
            Lesson::Strings => strings::run(console),
            Lesson::DynamicMemory => memory::run(console),
            Lesson::Structs => structs::run(&mut console.out),
            Lesson::Factorial => factorial::run(console),
        }
    }
}

/// Writes `values` space-separated after `label`, one line.
pub(crate) fn write_sequence<W: Write, T: std::fmt::Display>(
    out: &mut W,
    label: &str,
    values: impl IntoIterator<Item = T>,
) -> Result<()> {
    write!(out, "{}", label)?;
    for value in values {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;
    Ok(())
}
