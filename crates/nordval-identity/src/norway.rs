//! Norwegian fødselsnummer and D-nummer.
//!
//! Layout `DDMMYYZZZQQ` or `DDMMYY-ZZZQQ`: day, month, two-digit year,
//! individual number `ZZZ` and two control digits. D-numbers add 40 to the
//! day. Normalized form is the eleven digits without separator.

use nordval_core::{checksum, RejectionKind};

use crate::century;
use crate::classify::{birth_date, field, strip_separators, Classified, NumberKind, Pattern};
use crate::parsed::Gender;

static STANDARD: Pattern = Pattern::new(r"^([0-3][0-9][0-1][0-9]{3}-?[0-9]{5})$");
static TEMPORARY: Pattern = Pattern::new(r"^([4-7][0-9][0-1][0-9]{3}-?[0-9]{5})$");

const TEMPORARY_DAY_OFFSET: u32 = 40;

pub(crate) fn classify(input: &str) -> Result<Classified, RejectionKind> {
    let kind = NumberKind::detect(input, &STANDARD, Some(&TEMPORARY))?;
    let digits = strip_separators(input, &['-']);

    let day = kind.birth_day(field(&digits, 0..2)?, TEMPORARY_DAY_OFFSET)?;
    let month = field(&digits, 2..4)?;
    let serial = field(&digits, 6..9)?;
    let year = century::norway(field(&digits, 4..6)?, serial)
        .ok_or(RejectionKind::UndefinedCentury)?;
    let birth_date = birth_date(year, month, day)?;

    if !checksum::norwegian_control(&digits) {
        return Err(RejectionKind::ChecksumMismatch);
    }

    Ok(Classified {
        normalized: digits,
        birth_date,
        gender: Gender::Unknown,
        kind,
    })
}
