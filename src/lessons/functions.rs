use crate::error::Result;
use std::io::Write;

/// Exchanges the values behind `a` and `b`.
fn swap(a: &mut i32, b: &mut i32) {
    let t = *a;
    *a = *b;
    *b = t;
}

pub(super) fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut a = 3;
    let mut b = 9;
    swap(&mut a, &mut b);
    writeln!(out, "swap -> a={} b={}", a, b)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_exchanges_values() {
        let (mut a, mut b) = (3, 9);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (9, 3));
    }

    #[test]
    fn test_output_reports_swapped_values() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "swap -> a=9 b=3\n");
    }
}
