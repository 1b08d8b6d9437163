mod cli;
mod console;
mod error;
mod lessons;

use clap::Parser;
use cli::{App, Cli, Outcome};
use colored::*;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr, filtered by `RUST_LOG`, and optionally to a daily file under `log_dir`.
/// The returned guard flushes the file writer when dropped.
fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "lessons.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let _guard = init_logging(cli.log_dir.as_deref());

    info!("Starting lessons CLI...");

    let mut app = App::stdio();
    match app.run(cli.command.unwrap_or_default()) {
        Ok(Outcome::Exited) => {
            info!("Exited normally.");
            ExitCode::SUCCESS
        },
        Ok(Outcome::InputFailed) => ExitCode::FAILURE,
        Err(e) => {
            error!("Command execution failed: {:?}", e);
            eprintln!("{} {}", "Error:".red(), e.to_string().red());
            ExitCode::FAILURE
        },
    }
}
