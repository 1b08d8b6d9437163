//! Terminal plumbing shared by the menu loop and the lessons.
//!
//! `Console` bundles a whitespace-token reader over any `BufRead` with two writers,
//! one for regular output and one for diagnostics. The binary wires it to the locked
//! standard streams; tests wire it to in-memory buffers.

use crate::error::{AppError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, StderrLock, StdinLock, StdoutLock, Write};

/// Splits input into whitespace-separated tokens, pulling lines lazily.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Invalid UTF-8 becomes U+FFFD, so such a token fails to parse instead of
            // surfacing as an I/O error.
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Reads the next token as an integer. A malformed token is consumed.
    pub fn next_int(&mut self) -> Result<i64> {
        let token = self.next_token()?.ok_or(AppError::InputClosed)?;
        token
            .parse::<i64>()
            .map_err(|_| AppError::NotAnInteger(token))
    }
}

/// Input and output handles for one interactive session.
pub struct Console<R, W, E> {
    input: Tokens<R>,
    pub out: W,
    pub err: E,
}

/// The console used by the binary.
pub type StdConsole = Console<StdinLock<'static>, StdoutLock<'static>, StderrLock<'static>>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(
            std::io::stdin().lock(),
            std::io::stdout().lock(),
            std::io::stderr().lock(),
        )
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input: Tokens::new(input),
            out,
            err,
        }
    }

    /// Writes `text` without a newline and flushes so it shows before blocking on input.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn read_int(&mut self) -> Result<i64> {
        self.input.next_int()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines_and_spaces() {
        let mut tokens = Tokens::new(Cursor::new("  1 2\n\n 3\t4 \n"));
        let mut seen = Vec::new();
        while let Some(token) = tokens.next_token().unwrap() {
            seen.push(token);
        }
        assert_eq!(seen, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_next_int_reports_bad_token_and_moves_on() {
        let mut tokens = Tokens::new(Cursor::new("abc 7"));
        match tokens.next_int() {
            Err(AppError::NotAnInteger(token)) => assert_eq!(token, "abc"),
            other => panic!("Expected NotAnInteger, got {:?}", other),
        }
        assert_eq!(tokens.next_int().unwrap(), 7);
        assert!(matches!(tokens.next_int(), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_invalid_utf8_is_a_bad_token() {
        let mut tokens = Tokens::new(Cursor::new(b"\xff\xfe\n12\n".to_vec()));
        assert!(matches!(tokens.next_int(), Err(AppError::NotAnInteger(_))));
        assert_eq!(tokens.next_int().unwrap(), 12);
    }

    #[test]
    fn test_prompt_writes_without_newline() {
        let mut console = mem_console("");
        console.prompt("Choose: ").unwrap();
        assert_eq!(stdout_of(&console), "Choose: ");
        assert!(stderr_of(&console).is_empty());
    }
}
