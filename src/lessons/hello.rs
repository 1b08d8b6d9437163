use crate::error::Result;
use std::io::Write;

pub(super) fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Hello, Rust!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Rust!\n");
    }
}
