//! Property tests: normalization is idempotent and the validity check
//! agrees with the parser for arbitrary input.

use std::sync::Arc;

use nordval_core::checksum;
use nordval_core::FixedClock;
use nordval_identity::{Country, NationalIdentifierValidator};
use proptest::prelude::*;

fn validator() -> NationalIdentifierValidator {
    NationalIdentifierValidator::new(Arc::new(FixedClock::parse_date("2010-01-01").unwrap()))
}

/// A Swedish short-form personnummer born 1911..=2009, separator `-`.
fn swedish() -> impl Strategy<Value = String> {
    (1911i32..=2009, 1u32..=12, 1u32..=28, 0u32..1000).prop_map(|(year, month, day, serial)| {
        let payload = format!("{:02}{month:02}{day:02}{serial:03}", year % 100);
        let control = checksum::swedish_control_digit(&payload).unwrap();
        format!("{}-{}{control}", &payload[..6], &payload[6..])
    })
}

/// A Norwegian fødselsnummer born in the 1900s with serial 000..=499.
fn norwegian() -> impl Strategy<Value = Option<String>> {
    (0u32..100, 1u32..=12, 1u32..=28, 0u32..500).prop_map(|(yy, month, day, serial)| {
        let payload = format!("{day:02}{month:02}{yy:02}{serial:03}");
        checksum::norwegian_control_digits(&payload).map(|[k1, k2]| format!("{payload}{k1}{k2}"))
    })
}

/// A Finnish henkilötunnus with any century sign.
fn finnish() -> impl Strategy<Value = String> {
    (0u32..100, 1u32..=12, 1u32..=28, prop::sample::select(vec!['+', '-', 'A']), 2u32..900)
        .prop_map(|(yy, month, day, sign, serial)| {
            let digits = format!("{day:02}{month:02}{yy:02}{serial:03}");
            let control = checksum::finnish_control_char(digits.parse().unwrap());
            format!("{}{sign}{}{control}", &digits[..6], &digits[6..])
        })
}

/// A Danish CPR number with a serial from the 1900s-only band.
fn danish() -> impl Strategy<Value = String> {
    (0u32..100, 1u32..=12, 1u32..=28, 1u32..4000)
        .prop_map(|(yy, month, day, serial)| format!("{day:02}{month:02}{yy:02}-{serial:04}"))
}

proptest! {
    #[test]
    fn swedish_normalize_is_idempotent(input in swedish()) {
        let v = validator();
        let se = v.for_country(Country::Sweden);
        let once = se.normalize(&input).unwrap();
        prop_assert_eq!(se.normalize(&once).unwrap(), once.clone());
        prop_assert_eq!(v.normalize_for_any_country(&once).unwrap(), once);
    }

    #[test]
    fn norwegian_normalize_is_idempotent(input in norwegian()) {
        if let Some(input) = input {
            let v = validator();
            let no = v.for_country(Country::Norway);
            let once = no.normalize(&input).unwrap();
            prop_assert_eq!(no.normalize(&once).unwrap(), once);
        }
    }

    #[test]
    fn finnish_normalize_is_idempotent(input in finnish()) {
        let v = validator();
        let fi = v.for_country(Country::Finland);
        let once = fi.normalize(&input).unwrap();
        prop_assert_eq!(fi.normalize(&once).unwrap(), once);
    }

    #[test]
    fn danish_normalize_is_idempotent(input in danish()) {
        let v = validator();
        let dk = v.for_country(Country::Denmark);
        let once = dk.normalize(&input).unwrap();
        prop_assert_eq!(dk.normalize(&once).unwrap(), once);
    }

    #[test]
    fn validity_agrees_with_parse(input in "[0-9]{6}[-+A.]?[0-9]{3,6}[0-9A-Y]?") {
        let v = validator();
        for country in Country::all() {
            let cv = v.for_country(*country);
            let parsed = cv.parse(&input);
            prop_assert_eq!(cv.is_valid(&input), parsed.valid);
            prop_assert_eq!(cv.normalize(&input).is_ok(), parsed.valid);
            prop_assert_eq!(parsed.date_of_birth.is_some(), parsed.valid);
        }
    }

    #[test]
    fn any_country_agrees_with_some_country(input in "[0-9]{2}[.]?[0-9]{2}[.-]?[0-9]{2,4}[-+]?[0-9]{0,5}") {
        let v = validator();
        let any = v.is_valid_in_any_country(&input);
        let some = Country::detectable().iter().any(|c| v.for_country(*c).is_valid(&input));
        prop_assert_eq!(any, some);
    }
}
