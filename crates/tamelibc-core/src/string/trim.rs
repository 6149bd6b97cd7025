//! In-place case conversion and whitespace trimming: strtolower,
//! strtoupper, strtrim, strtriml, strtrimr.
//!
//! Trimming treats the C `isspace` set as whitespace. The left-trimming
//! operations return interior views: subslices aliasing the caller's
//! buffer, not owned copies.

use crate::ctype;
use crate::string::str::strlen;

/// Converts the string in `s` to lowercase in place and returns the buffer.
///
/// Every byte up to the NUL terminator goes through the ASCII mapping.
pub fn strtolower(s: &mut [u8]) -> &mut [u8] {
    let len = strlen(s);
    for byte in &mut s[..len] {
        *byte = ctype::to_lower(*byte);
    }
    s
}

/// Converts the string in `s` to uppercase in place and returns the buffer.
///
/// Every byte up to the NUL terminator goes through the ASCII mapping.
pub fn strtoupper(s: &mut [u8]) -> &mut [u8] {
    let len = strlen(s);
    for byte in &mut s[..len] {
        *byte = ctype::to_upper(*byte);
    }
    s
}

/// Removes trailing whitespace in place and returns the buffer.
///
/// Scans backward from the end of the string and overwrites the first byte
/// of the trailing whitespace run with the NUL terminator.
pub fn strtrimr(s: &mut [u8]) -> &mut [u8] {
    let len = strlen(s);
    let keep = s[..len]
        .iter()
        .rposition(|&b| !ctype::is_space(b))
        .map_or(0, |i| i + 1);
    if keep < len {
        s[keep] = 0;
    }
    s
}

/// Returns the string in `s` with leading whitespace skipped.
///
/// Does not modify the buffer. The result is a view into `s` starting at
/// the first non-whitespace byte, or at the terminator when the string is
/// all whitespace. It aliases the caller's storage and is valid only for
/// as long as that borrow lives.
#[must_use]
pub fn strtriml(s: &[u8]) -> &[u8] {
    let len = strlen(s);
    let start = s[..len]
        .iter()
        .position(|&b| !ctype::is_space(b))
        .unwrap_or(len);
    &s[start..]
}

/// Removes leading and trailing whitespace and returns the trimmed string.
///
/// Trailing whitespace is removed in place ([`strtrimr`]); the leading run
/// is skipped by returning an interior view ([`strtriml`]).
pub fn strtrim(s: &mut [u8]) -> &[u8] {
    strtrimr(s);
    strtriml(s)
}
