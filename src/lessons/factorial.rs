//! Interactive factorial over `0..=20`, the range whose results fit in an `i64`.

use crate::console::Console;
use crate::error::{AppError, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::warn;

const MAX_N: i64 = 20;

/// `n!` by repeated multiplication from 2 upward. `n` must be in `0..=20`.
pub fn factorial(n: u32) -> i64 {
    let mut result: i64 = 1;
    for i in 2..=i64::from(n) {
        result *= i;
    }
    result
}

/// Reads one integer and checks it against `0..=20`.
fn read_n<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<u32> {
    let value = console.read_int()?;
    u32::try_from(value)
        .ok()
        .filter(|n| i64::from(*n) <= MAX_N)
        .ok_or(AppError::OutOfRange {
            value,
            min: 0,
            max: MAX_N,
        })
}

pub(super) fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    console.prompt("Enter a non-negative integer (0-20): ")?;
    match read_n(console) {
        Ok(n) => {
            writeln!(console.out, "{}! = {}", n, factorial(n))?;
        },
        Err(e @ AppError::OutOfRange { .. }) => {
            warn!("Rejected factorial input: {}", e);
            writeln!(
                console.err,
                "{}",
                "Please enter a value between 0 and 20.".red()
            )?;
        },
        Err(e) if e.is_input() => {
            warn!("Rejected factorial input: {}", e);
            writeln!(console.err, "{}", "Invalid input.".red())?;
        },
        Err(e) => return Err(e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(5, 120)]
    #[case(10, 3_628_800)]
    #[case(20, 2_432_902_008_176_640_000)]
    fn test_factorial(#[case] n: u32, #[case] expected: i64) {
        assert_eq!(factorial(n), expected);
    }

    #[test]
    fn test_invalid_utf8_input_is_rejected() {
        let mut console = mem_console_bytes(b"\xff\xfe\n");
        run(&mut console).unwrap();
        assert!(!stdout_of(&console).contains("! = "));
        assert!(stderr_of(&console).contains("Invalid input."));
    }

    #[rstest]
    #[case("5\n", "5! = 120")]
    #[case("0\n", "0! = 1")]
    #[case("  20  \n", "20! = 2432902008176640000")]
    fn test_valid_input_prints_result(#[case] input: &str, #[case] expected: &str) {
        let mut console = mem_console(input);
        run(&mut console).unwrap();
        let out = stdout_of(&console);
        assert!(out.starts_with("Enter a non-negative integer (0-20): "));
        assert!(out.contains(expected), "missing {:?} in {:?}", expected, out);
        assert!(stderr_of(&console).is_empty());
    }

    #[rstest]
    #[case("-1\n", "between 0 and 20")]
    #[case("21\n", "between 0 and 20")]
    #[case("99999999999999999999\n", "Invalid input.")]
    #[case("abc\n", "Invalid input.")]
    #[case("", "Invalid input.")]
    #[case("-4294967296\n", "between 0 and 20")]
    #[case("4294967296\n", "between 0 and 20")]
    fn test_rejected_input_prints_no_result(#[case] input: &str, #[case] diagnostic: &str) {
        let mut console = mem_console(input);
        run(&mut console).unwrap();
        assert!(!stdout_of(&console).contains("! = "));
        assert!(stderr_of(&console).contains(diagnostic));
    }
}
