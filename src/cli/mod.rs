//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the argument parser, the numbered and arrow-key menus, and the
//! `App` that ties a parsed command to a console.

mod commands;
mod menu;

pub use commands::*;
pub use menu::Outcome;
