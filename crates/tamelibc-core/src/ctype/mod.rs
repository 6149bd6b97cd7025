//! Character classification and conversion.
//!
//! Byte-domain predicates and the locale-independent ASCII case mapping,
//! plus integer-domain conversions that accept the end-of-input sentinel
//! and pass out-of-domain values through unchanged instead of invoking the
//! undefined behavior the C classification functions reserve for them.

/// End-of-input sentinel accepted by the integer-domain conversions.
pub const EOF: i32 = -1;

/// Returns `true` if `c` is a whitespace character.
///
/// Whitespace: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
#[must_use]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
#[must_use]
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
#[must_use]
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Converts `c` to uppercase if it is a lowercase letter.
#[inline]
#[must_use]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}

/// Converts `c` to lowercase if it is an uppercase letter.
#[inline]
#[must_use]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

/// Integer-domain lowercase conversion.
///
/// Applies the ASCII mapping when `c` is representable as `u8`. Any other
/// value is returned unchanged, [`EOF`] included (the mapping would leave
/// it untouched anyway).
#[inline]
#[must_use]
pub fn to_lower_int(c: i32) -> i32 {
    match u8::try_from(c) {
        Ok(b) => i32::from(to_lower(b)),
        Err(_) => c,
    }
}

/// Integer-domain uppercase conversion.
///
/// Counterpart of [`to_lower_int`].
#[inline]
#[must_use]
pub fn to_upper_int(c: i32) -> i32 {
    match u8::try_from(c) {
        Ok(b) => i32::from(to_upper(b)),
        Err(_) => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space() {
        assert!(is_space(b' '));
        assert!(is_space(b'\t'));
        assert!(is_space(b'\n'));
        assert!(is_space(0x0B));
        assert!(is_space(0x0C));
        assert!(is_space(b'\r'));
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
    }

    #[test]
    fn test_is_upper_lower() {
        for c in b'A'..=b'Z' {
            assert!(is_upper(c));
            assert!(!is_lower(c));
        }
        for c in b'a'..=b'z' {
            assert!(is_lower(c));
            assert!(!is_upper(c));
        }
    }

    #[test]
    fn test_to_upper_lower() {
        assert_eq!(to_upper(b'a'), b'A');
        assert_eq!(to_upper(b'z'), b'Z');
        assert_eq!(to_upper(b'A'), b'A');
        assert_eq!(to_upper(b'0'), b'0');
        assert_eq!(to_lower(b'A'), b'a');
        assert_eq!(to_lower(b'Z'), b'z');
        assert_eq!(to_lower(b'a'), b'a');
        assert_eq!(to_lower(b'5'), b'5');
    }

    #[test]
    fn byte_round_trips() {
        for c in 0u8..=255 {
            assert_eq!(to_lower(to_upper(c)), to_lower(c), "round-trip failed for {c}");
            assert_eq!(to_upper(to_lower(c)), to_upper(c), "round-trip failed for {c}");
        }
    }

    #[test]
    fn int_conversion_agrees_with_byte_mapping() {
        for c in 0i32..=255 {
            assert_eq!(to_lower_int(c), i32::from(to_lower(c as u8)));
            assert_eq!(to_upper_int(c), i32::from(to_upper(c as u8)));
        }
    }

    #[test]
    fn int_conversion_passes_eof_through() {
        assert_eq!(to_lower_int(EOF), EOF);
        assert_eq!(to_upper_int(EOF), EOF);
    }

    #[test]
    fn int_conversion_passes_out_of_domain_through() {
        assert_eq!(to_lower_int(256), 256);
        assert_eq!(to_upper_int(256), 256);
        assert_eq!(to_lower_int(-2), -2);
        assert_eq!(to_upper_int(-2), -2);
        assert_eq!(to_lower_int(i32::MIN), i32::MIN);
        assert_eq!(to_upper_int(i32::MAX), i32::MAX);
    }
}
