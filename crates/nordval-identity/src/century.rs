//! # Century Resolution
//!
//! Most identifiers carry a two-digit birth year. Each country places it in
//! a century with its own disambiguator:
//!
//! - **Denmark**: the four-digit serial number.
//! - **Norway**: the three-digit serial number.
//! - **Finland**: the century sign (`+`, `-`, `A`).
//! - **Sweden**: the current year and an optional `+` separator.
//!
//! Resolvers return `None` when the combination lies outside every range;
//! callers reject such identifiers with `UndefinedCentury`. A resolved year
//! still has to pass calendar validation.

/// Resolve a Danish birth year from the serial number.
///
/// | Serial | Year 00–36 | Year 37–57 | Year 58–99 |
/// |--------|------------|------------|------------|
/// | 0001–3999 | 1900s | 1900s | 1900s |
/// | 4000–4999 | 2000s | 1900s | 1900s |
/// | 5000–8999 | 2000s | 2000s | 1800s |
/// | 9000–9999 | 2000s | 1900s | 1900s |
///
/// Serial `0000` is never issued and resolves to `None`.
pub fn denmark(two_digit_year: u32, serial: u32) -> Option<i32> {
    let century = match serial {
        1..=3999 => 1900,
        4000..=4999 | 9000..=9999 if two_digit_year >= 37 => 1900,
        4000..=4999 | 9000..=9999 => 2000,
        5000..=8999 if two_digit_year <= 57 => 2000,
        5000..=8999 => 1800,
        _ => return None,
    };
    with_century(century, two_digit_year)
}

/// Resolve a Norwegian birth year from the individual (serial) number.
///
/// | Serial | Year 00–39 | Year 40–53 | Year 54–99 |
/// |--------|------------|------------|------------|
/// | 000–499 | 1900s | 1900s | 1900s |
/// | 500–749 | 2000s | undefined | 1800s |
/// | 750–899 | 2000s | undefined | undefined |
/// | 900–999 | 2000s | 1900s | 1900s |
pub fn norway(two_digit_year: u32, serial: u32) -> Option<i32> {
    let century = match serial {
        0..=499 => 1900,
        900..=999 if two_digit_year >= 40 => 1900,
        500..=999 if two_digit_year <= 39 => 2000,
        500..=749 if two_digit_year >= 54 => 1800,
        _ => return None,
    };
    with_century(century, two_digit_year)
}

/// Resolve a Finnish birth year from its century sign.
pub fn finland(two_digit_year: u32, sign: char) -> Option<i32> {
    let century = match sign {
        '+' => 1800,
        '-' => 1900,
        'A' => 2000,
        _ => return None,
    };
    with_century(century, two_digit_year)
}

/// Resolve a Swedish two-digit birth year against the current year.
///
/// The year is placed in the current century, moved back a century if that
/// would put the birth in the future, and moved back one more century when
/// the identifier carries a `+` separator (holder aged 100 or over).
pub fn sweden(two_digit_year: u32, plus_sign: bool, current_year: i32) -> i32 {
    let current_century = current_year - current_year.rem_euclid(100);
    // two_digit_year comes from a two-character field.
    let mut year = current_century + (two_digit_year % 100) as i32;
    if year > current_year {
        year -= 100;
    }
    if plus_sign {
        year -= 100;
    }
    year
}

fn with_century(century: i32, two_digit_year: u32) -> Option<i32> {
    if two_digit_year > 99 {
        return None;
    }
    Some(century + two_digit_year as i32)
}
