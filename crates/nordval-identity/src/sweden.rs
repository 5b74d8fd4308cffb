//! Swedish personnummer and samordningsnummer.
//!
//! Accepted layouts: `YYMMDD-NNNC`, `YYMMDD+NNNC`, `YYYYMMDD-NNNC` with each
//! separator optional. `+` marks a holder aged 100 or over. Coordination
//! numbers add 60 to the day. Normalized form: `YYYYMMDDNNNC`, day offset
//! kept.

use chrono::{Datelike, NaiveDate};
use nordval_core::{checksum, RejectionKind};

use crate::century;
use crate::classify::{birth_date, field, strip_separators, Classified, NumberKind, Pattern};
use crate::parsed::Gender;

static STANDARD: Pattern =
    Pattern::new(r"^(([0-9]{2}|[0-9]{4})-?[0-1][0-9]-?[0-3][0-9][-+]?[0-9]{4})$");
static TEMPORARY: Pattern =
    Pattern::new(r"^(([0-9]{2}|[0-9]{4})-?[0-1][0-9]-?[6-9][0-9][-+]?[0-9]{4})$");

const TEMPORARY_DAY_OFFSET: u32 = 60;

pub(crate) fn classify(input: &str, today: NaiveDate) -> Result<Classified, RejectionKind> {
    let kind = NumberKind::detect(input, &STANDARD, Some(&TEMPORARY))?;
    let plus_sign = input.contains('+');
    let digits = strip_separators(input, &['-', '+']);

    // Long form carries its own century; the short form YYMMDDNNNC is what
    // the control digit covers.
    let (year, short) = match digits.len() {
        12 => (field(&digits, 0..4)? as i32, digits.get(2..).unwrap_or_default()),
        10 => {
            let two_digit_year = field(&digits, 0..2)?;
            (
                century::sweden(two_digit_year, plus_sign, today.year()),
                digits.as_str(),
            )
        }
        _ => return Err(RejectionKind::StructuralMismatch),
    };

    let month = field(short, 2..4)?;
    let day = kind.birth_day(field(short, 4..6)?, TEMPORARY_DAY_OFFSET)?;
    let birth_date = birth_date(year, month, day)?;

    if !checksum::swedish_control(short) {
        return Err(RejectionKind::ChecksumMismatch);
    }

    Ok(Classified {
        normalized: format!("{year:04}{}", short.get(2..).unwrap_or_default()),
        birth_date,
        gender: Gender::Unknown,
        kind,
    })
}
