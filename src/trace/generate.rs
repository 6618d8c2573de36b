use std::io::Write;

use tracing::info;

use crate::error::TraceError;

/// Number of letters strings are built from.
pub const ALPHABET_LEN: u64 = 26;

/// The lowercase string of length `len` at position `index` of the
/// enumeration `"aa..a"`, `"aa..b"`, ..., `"zz..z"`.
///
/// Digits above `len` are ignored.
pub fn permutation(index: u64, len: u32) -> String {
    (0..len)
        .rev()
        .map(|position| {
            let digit = ALPHABET_LEN
                .checked_pow(position)
                .map_or(0, |weight| (index / weight) % ALPHABET_LEN);
            char::from(b'a' + digit as u8)
        })
        .collect()
}

/// Writes a sort stress trace: `new`, an `ih` line for every lowercase
/// string of length `len` from the last in enumeration order down to the
/// first, then `sort` and `free`.
///
/// Returns the number of strings written.
pub fn write_sort_trace<W: Write>(out: &mut W, len: u32) -> Result<u64, TraceError> {
    if len == 0 {
        return Err(TraceError::InvalidLength(len));
    }
    let count = ALPHABET_LEN
        .checked_pow(len)
        .ok_or(TraceError::InvalidLength(len))?;

    writeln!(out, "new")?;
    for index in (0..count).rev() {
        writeln!(out, "ih {}", permutation(index, len))?;
    }
    writeln!(out, "sort")?;
    writeln!(out, "free")?;

    info!(len, count, "generated sort trace");
    Ok(count)
}
