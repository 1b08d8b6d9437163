//! Heap allocation with fallible reservation: allocate, grow, release.
//!
//! `Vec::try_reserve_exact` surfaces allocator refusal as an error instead of aborting,
//! which is what lets this lesson report the failure and carry on. The buffer is owned by
//! the local `Vec`, so it is released on every return path, early or not.

use super::write_sequence;
use crate::console::Console;
use crate::error::{AppError, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const INITIAL_LEN: usize = 5;
const GROWN_LEN: usize = 8;

/// Squares of `from..to`, in order.
fn squares(from: usize, to: usize) -> impl Iterator<Item = i64> {
    (from..to).map(|i| (i * i) as i64)
}

/// Builds a buffer of `initial` squares, prints it, grows it to `grown`, prints again.
fn allocate_and_grow<W: Write>(out: &mut W, initial: usize, grown: usize) -> Result<()> {
    let mut buf: Vec<i64> = Vec::new();
    buf.try_reserve_exact(initial)?;
    debug!(capacity = buf.capacity(), "Allocated buffer");
    buf.extend(squares(0, initial));
    write_sequence(out, "allocate: ", &buf)?;

    buf.try_reserve_exact(grown.saturating_sub(buf.len()))?;
    debug!(capacity = buf.capacity(), "Grew buffer");
    buf.extend(squares(initial, grown));
    write_sequence(out, "grow:     ", &buf)?;

    drop(buf);
    debug!("Released buffer");
    Ok(())
}

pub(super) fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    run_with(console, INITIAL_LEN, GROWN_LEN)
}

/// Runs the lesson with the given buffer sizes, reporting a refused allocation on stderr.
fn run_with<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    initial: usize,
    grown: usize,
) -> Result<()> {
    match allocate_and_grow(&mut console.out, initial, grown) {
        Err(AppError::Alloc(e)) => {
            warn!("Dynamic memory lesson aborted: {}", e);
            writeln!(console.err, "{}", format!("allocation failed: {}", e).red())?;
            Ok(())
        },
        other => other,
    }
}
