//! Danish CPR-nummer.
//!
//! Layout `DDMMYYSSSS` or `DDMMYY-SSSS`. The serial number places the year
//! in a century and its parity gives the gender. Temporary numbers add 60
//! to the day. There is no control digit check: numbers issued since 2007
//! no longer satisfy the old Mod11 rule.

use nordval_core::RejectionKind;

use crate::century;
use crate::classify::{birth_date, field, strip_separators, Classified, NumberKind, Pattern};
use crate::parsed::Gender;

static STANDARD: Pattern = Pattern::new(r"^([0-3][0-9][0-1][0-9]{3}-?[0-9]{4})$");
static TEMPORARY: Pattern = Pattern::new(r"^([6-9][0-9][0-1][0-9]{3}-?[0-9]{4})$");

const TEMPORARY_DAY_OFFSET: u32 = 60;

pub(crate) fn classify(input: &str) -> Result<Classified, RejectionKind> {
    let kind = NumberKind::detect(input, &STANDARD, Some(&TEMPORARY))?;
    let digits = strip_separators(input, &['-']);

    let day = kind.birth_day(field(&digits, 0..2)?, TEMPORARY_DAY_OFFSET)?;
    let month = field(&digits, 2..4)?;
    let serial = field(&digits, 6..10)?;
    let year = century::denmark(field(&digits, 4..6)?, serial)
        .ok_or(RejectionKind::UndefinedCentury)?;
    let birth_date = birth_date(year, month, day)?;

    Ok(Classified {
        normalized: digits,
        birth_date,
        gender: Gender::from_serial_parity(serial),
        kind,
    })
}
