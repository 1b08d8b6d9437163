//! Primitive values and the number of bytes each type occupies.

use crate::error::Result;
use std::io::Write;
use std::mem::size_of;

#[allow(clippy::approx_constant)]
pub(super) fn run<W: Write>(out: &mut W) -> Result<()> {
    let i: i32 = 10;
    let f: f32 = 3.14;
    let d: f64 = 2.71828;
    let c: char = 'A';

    writeln!(out, "i={} f={:.2} d={:.5} c={}", i, f, d, c)?;
    writeln!(
        out,
        "size_of::<i32>()={} size_of::<f32>()={} size_of::<f64>()={} size_of::<char>()={}",
        size_of::<i32>(),
        size_of::<f32>(),
        size_of::<f64>(),
        size_of::<char>()
    )?;
    // One-byte characters are `u8`; `char` holds any Unicode scalar value.
    writeln!(out, "size_of::<u8>()={}", size_of::<u8>())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_and_sizes() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("i=10 f=3.14 d=2.71828 c=A"));
        assert!(text.contains("size_of::<i32>()=4"));
        assert!(text.contains("size_of::<f32>()=4"));
        assert!(text.contains("size_of::<f64>()=8"));
        assert!(text.contains("size_of::<char>()=4"));
        assert!(text.contains("size_of::<u8>()=1"));
    }
}
