//! Concatenation into a fixed-capacity, NUL-terminated byte buffer.

use crate::console::Console;
use crate::error::{AppError, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::warn;

/// A byte buffer of `N` bytes that always keeps a trailing NUL after its content.
pub struct FixedBuf<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedBuf<N> {
    /// Buffer initialised with `init`, or a capacity error if it does not fit with its terminator.
    pub fn new(init: &str) -> Result<Self> {
        let mut buf = Self { bytes: [0; N] };
        buf.push_str(init)?;
        Ok(buf)
    }

    /// Appends `s` after the current content, like `strcat`, but refuses to overrun.
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        let len = c_strlen(&self.bytes);
        let needed = len + s.len() + 1;
        if needed > N {
            return Err(AppError::Capacity {
                needed,
                capacity: N,
            });
        }
        self.bytes[len..len + s.len()].copy_from_slice(s.as_bytes());
        self.bytes[len + s.len()] = 0;
        Ok(())
    }

    /// Content up to the terminator. Only `&str` is ever copied in, so it is valid UTF-8.
    pub fn as_str(&self) -> &str {
        let len = c_strlen(&self.bytes);
        std::str::from_utf8(&self.bytes[..len]).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Counts bytes up to the first NUL, walking one byte at a time.
pub fn c_strlen(s: &[u8]) -> usize {
    let mut n = 0;
    while n < s.len() && s[n] != 0 {
        n += 1;
    }
    n
}

fn concat(base: &str, suffix: &str) -> Result<FixedBuf<32>> {
    let mut buf = FixedBuf::<32>::new(base)?;
    buf.push_str(suffix)?;
    Ok(buf)
}

pub(super) fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    run_with(console, "Apple", "Vision")
}

/// Concatenates `suffix` onto `base` and reports the result, or the overrun on stderr.
fn run_with<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    base: &str,
    suffix: &str,
) -> Result<()> {
    match concat(base, suffix) {
        Ok(buf) => {
            writeln!(
                console.out,
                "buf='{}' len={}",
                buf.as_str(),
                c_strlen(buf.as_bytes())
            )?;
        },
        Err(e) => {
            warn!("String lesson aborted: {}", e);
            writeln!(console.err, "{}", e.to_string().red())?;
        },
    }
    Ok(())
}
