//! Finnish henkilötunnus.
//!
//! Layout `DDMMYYCZZZQ`: date, century sign `C` (`+` 1800s, `-` 1900s,
//! `A` 2000s), individual number `ZZZ` and control character `Q`. There is
//! no optional separator, so a valid input is already in normalized form.

use nordval_core::{checksum, RejectionKind};

use crate::century;
use crate::classify::{birth_date, field, Classified, NumberKind, Pattern};
use crate::parsed::Gender;

static STANDARD: Pattern =
    Pattern::new(r"^[0-3][0-9][0-1][0-9]{3}[-+A][0-9]{3}[0123456789ABCDEFHJKLMNPRSTUVWXY]$");

pub(crate) fn classify(input: &str) -> Result<Classified, RejectionKind> {
    let kind = NumberKind::detect(input, &STANDARD, None)?;

    let day = field(input, 0..2)?;
    let month = field(input, 2..4)?;
    let sign = input.chars().nth(6).ok_or(RejectionKind::StructuralMismatch)?;
    let year = century::finland(field(input, 4..6)?, sign).ok_or(RejectionKind::UndefinedCentury)?;
    let birth_date = birth_date(year, month, day)?;

    let control = input.chars().nth(10).ok_or(RejectionKind::StructuralMismatch)?;
    let date_and_serial = format!(
        "{}{}",
        input.get(0..6).unwrap_or_default(),
        input.get(7..10).unwrap_or_default()
    );
    if !checksum::finnish_control(&date_and_serial, control) {
        return Err(RejectionKind::ChecksumMismatch);
    }

    Ok(Classified {
        normalized: input.to_string(),
        birth_date,
        gender: Gender::Unknown,
        kind,
    })
}
