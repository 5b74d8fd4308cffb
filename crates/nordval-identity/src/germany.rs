//! German birthdate identifier `DD.MM.YYYY`, normalized to `YYYYMMDD`.

use nordval_core::RejectionKind;

use crate::classify::{birth_date, field, Classified, NumberKind, Pattern};
use crate::parsed::Gender;

static STANDARD: Pattern = Pattern::new(r"^([0-9]{2}\.[0-9]{2}\.[0-9]{4})$");

pub(crate) fn classify(input: &str) -> Result<Classified, RejectionKind> {
    let kind = NumberKind::detect(input, &STANDARD, None)?;

    let day = field(input, 0..2)?;
    let month = field(input, 3..5)?;
    let year = field(input, 6..10)? as i32;
    let birth_date = birth_date(year, month, day)?;

    Ok(Classified {
        normalized: format!("{year:04}{month:02}{day:02}"),
        birth_date,
        gender: Gender::Unknown,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(classify("18.10.1964").unwrap().normalized, "19641018");
        assert_eq!(classify("29.02.2004").unwrap().normalized, "20040229");
    }

    #[test]
    fn test_rejection_stages() {
        assert_eq!(classify("01.01,2010"), Err(RejectionKind::StructuralMismatch));
        assert_eq!(classify("33.13.19191"), Err(RejectionKind::StructuralMismatch));
        assert_eq!(classify("00.01.1959"), Err(RejectionKind::InvalidCalendarDate));
        assert_eq!(classify("29.02.2005"), Err(RejectionKind::InvalidCalendarDate));
        assert_eq!(classify("01.01.0000"), Err(RejectionKind::InvalidCalendarDate));
    }
}
