//! # Checksum Schemes: Control Digit Arithmetic
//!
//! Pure functions over ASCII digit strings implementing every control-digit
//! scheme used by the Nordic identifiers:
//!
//! | Scheme | Used by | Verify | Generate |
//! |--------|---------|--------|----------|
//! | Mod10 (Luhn) | Bank accounts | [`mod10`] | [`mod10_check_digit`] |
//! | Mod11 | Bank accounts | [`mod11`] |: |
//! | Swedish digit doubling | Swedish personnummer | [`swedish_control`] | [`swedish_control_digit`] |
//! | Norwegian dual Mod11 | Norwegian fødselsnummer | [`norwegian_control`] | [`norwegian_control_digits`] |
//! | Finnish Mod31 character | Finnish henkilötunnus | [`finnish_control`] | [`finnish_control_char`] |
//!
//! ## Contract
//!
//! Callers classify their input with a structural pattern before calling in,
//! so the functions here only ever see digit strings of the right length.
//! Input that breaks the contract (non-digits, wrong length, empty) is
//! answered with `false` / `None`. These functions never panic.
//!
//! These are data-entry error detectors. They catch every single-digit
//! substitution and most transpositions; they are not security primitives.

/// Substitution table for a doubled Luhn digit: `d * 2` with its decimal
/// digits summed.
const MOD10_PRODUCTS: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Mod11 weights, right-aligned: the last digit gets the last weight.
const MOD11_WEIGHTS: [u32; 11] = [1, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Control character alphabet for Finnish identity numbers, indexed by
/// `value mod 31`. The letters G, I, O, Q and Z are absent.
pub const FINNISH_CONTROL_CHARS: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Weights for the first Norwegian control sum, indexed by digit position
/// counted from the right. Position 0 (the second control digit) is excluded.
const NORWEGIAN_SUM_ONE: [u32; 11] = [0, 1, 2, 5, 4, 9, 8, 1, 6, 7, 3];

/// Weights for the second Norwegian control sum, indexed by digit position
/// counted from the right.
const NORWEGIAN_SUM_TWO: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 2, 3, 4, 5];

/// Decode an ASCII digit string, or `None` if any character is not a digit.
fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

/// Luhn (Mod10) check over the whole digit string.
///
/// Walking from the last digit, every second digit (starting with the
/// second-to-last) is replaced by its doubled digit sum. The string is valid
/// when the total is divisible by 10.
pub fn mod10(digits: &str) -> bool {
    let Some(values) = digit_values(digits) else {
        return false;
    };
    if values.is_empty() {
        return false;
    }

    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 1 { MOD10_PRODUCTS[d as usize] } else { d })
        .sum();
    sum % 10 == 0
}

/// The Luhn digit that, appended to `payload`, makes it pass [`mod10`].
pub fn mod10_check_digit(payload: &str) -> Option<u32> {
    let values = digit_values(payload)?;
    if values.is_empty() {
        return None;
    }

    // Once the check digit is appended the payload's last digit is doubled.
    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { MOD10_PRODUCTS[d as usize] } else { d })
        .sum();
    Some((10 - sum % 10) % 10)
}

/// Weighted Mod11 check over at most 11 digits.
///
/// Weights `[1, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]` are applied right-aligned, so
/// the rightmost digit always gets weight 1. Valid when the weighted sum is
/// divisible by 11.
pub fn mod11(digits: &str) -> bool {
    let Some(values) = digit_values(digits) else {
        return false;
    };
    if values.is_empty() || values.len() > MOD11_WEIGHTS.len() {
        return false;
    }

    let sum: u32 = values
        .iter()
        .rev()
        .zip(MOD11_WEIGHTS.iter().rev())
        .map(|(d, w)| d * w)
        .sum();
    sum % 11 == 0
}

/// Swedish control digit check over a ten-digit `YYMMDDNNNC` value.
pub fn swedish_control(digits: &str) -> bool {
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match (
        digits.get(..9).and_then(swedish_control_digit),
        digits.get(9..).and_then(|control| control.parse::<u32>().ok()),
    ) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

/// Compute the Swedish control digit for a nine-digit `YYMMDDNNN` payload.
///
/// Counting positions from the right of the full ten-digit number, digits at
/// odd positions are doubled; the decimal digits of every product are summed
/// and the control digit is `(10 - total mod 10) mod 10`.
pub fn swedish_control_digit(payload: &str) -> Option<u32> {
    if payload.len() != 9 {
        return None;
    }
    let values = digit_values(payload)?;

    let total: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let product = if i % 2 == 0 { d * 2 } else { d };
            product / 10 + product % 10
        })
        .sum();
    Some((10 - total % 10) % 10)
}

/// Norwegian dual control digit check over an eleven-digit `DDMMYYZZZQQ`
/// value. Both weighted sums must be divisible by 11.
pub fn norwegian_control(digits: &str) -> bool {
    let Some(values) = digit_values(digits) else {
        return false;
    };
    if values.len() != 11 {
        return false;
    }

    // Position p counts from the right; values[10 - p] is the digit there.
    let sum_one: u32 = (1..11).map(|p| values[10 - p] * NORWEGIAN_SUM_ONE[p]).sum();
    let sum_two: u32 = (0..11).map(|p| values[10 - p] * NORWEGIAN_SUM_TWO[p]).sum();

    sum_one % 11 == 0 && sum_two % 11 == 0
}

/// Compute both Norwegian control digits for a nine-digit `DDMMYYZZZ`
/// payload.
///
/// Returns `None` when either control digit would have to be 10. Such
/// payloads are never issued; the serial number is skipped instead.
pub fn norwegian_control_digits(payload: &str) -> Option<[u32; 2]> {
    if payload.len() != 9 {
        return None;
    }
    let values = digit_values(payload)?;

    // In the finished number the payload digit at index j sits at position 10 - j.
    let partial_one: u32 = values
        .iter()
        .enumerate()
        .map(|(j, d)| d * NORWEGIAN_SUM_ONE[10 - j])
        .sum();
    let first = (11 - partial_one % 11) % 11;
    if first == 10 {
        return None;
    }

    let partial_two: u32 = values
        .iter()
        .chain(std::iter::once(&first))
        .enumerate()
        .map(|(j, d)| d * NORWEGIAN_SUM_TWO[10 - j])
        .sum();
    let second = (11 - partial_two % 11) % 11;
    if second == 10 {
        return None;
    }

    Some([first, second])
}

/// Finnish control character check.
///
/// `date_and_serial` is the six date digits followed by the three serial
/// digits (the century sign removed). The comparison is case-sensitive.
pub fn finnish_control(date_and_serial: &str, control: char) -> bool {
    if date_and_serial.len() != 9 || !date_and_serial.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match date_and_serial.parse::<u32>() {
        Ok(value) => finnish_control_char(value) == control,
        Err(_) => false,
    }
}

/// The control character for a nine-digit Finnish date-and-serial value.
pub fn finnish_control_char(value: u32) -> char {
    char::from(FINNISH_CONTROL_CHARS[(value % 31) as usize])
}
