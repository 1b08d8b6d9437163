//! The same array read twice: through indexing and through a raw pointer offset.

use super::write_sequence;
use crate::error::Result;
use std::io::Write;

const NUMBERS: [i32; 5] = [10, 20, 30, 40, 50];

fn by_index(arr: &[i32]) -> Vec<i32> {
    (0..arr.len()).map(|i| arr[i]).collect()
}

fn by_pointer(arr: &[i32]) -> Vec<i32> {
    let p = arr.as_ptr();
    (0..arr.len())
        // SAFETY: `i < arr.len()`, so `p.add(i)` stays inside the slice, which outlives `p`.
        .map(|i| unsafe { *p.add(i) })
        .collect()
}

pub(super) fn run<W: Write>(out: &mut W) -> Result<()> {
    let arr = NUMBERS;
    write_sequence(out, "arr via indexing: ", by_index(&arr))?;
    write_sequence(out, "arr via pointer:  ", by_pointer(&arr))
}
