//! Digit-string helpers.

/// Keep only the ASCII digits of `input`.
///
/// Spaces, dashes, dots and any other separators are dropped. Non-ASCII
/// digits (for example Arabic-Indic numerals) are dropped too.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a run of ASCII digits as an unsigned field value.
///
/// Returns `None` for empty input or any non-digit character, so a leading
/// sign is never accepted.
pub fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Left-pad `digits` with zeros to `width`. Longer input is returned as is.
pub fn zero_pad(digits: &str, width: usize) -> String {
    format!("{digits:0>width$}")
}

/// The last `n` characters of an ASCII string, or the whole string if shorter.
pub fn last_n(digits: &str, n: usize) -> &str {
    let start = digits.len().saturating_sub(n);
    digits.get(start..).unwrap_or(digits)
}
