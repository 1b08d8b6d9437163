use super::write_sequence;
use crate::error::Result;
use std::io::Write;

fn parity(x: i32) -> &'static str {
    if x % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

pub(super) fn run<W: Write>(out: &mut W) -> Result<()> {
    let x = 7;
    writeln!(out, "{} is {}", x, parity(x))?;
    write_sequence(out, "for loop: ", 0..5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(7, "odd")]
    #[case(0, "even")]
    #[case(-4, "even")]
    #[case(-3, "odd")]
    fn test_parity(#[case] x: i32, #[case] expected: &str) {
        assert_eq!(parity(x), expected);
    }

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "7 is odd\nfor loop: 0 1 2 3 4 \n"
        );
    }
}
