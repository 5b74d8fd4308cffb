//! # Calendar Rules
//!
//! Proleptic Gregorian date checks shared by every national identifier.
//! Identifiers encode dates as separate year, month and day fields; these
//! helpers decide whether such a triple names a real day.

use chrono::{Datelike, NaiveDate};

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Whether `year-month-day` is a real calendar day.
///
/// Years start at 1; year 0 and earlier are never valid birth years.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    if year < 1 || day == 0 {
        return false;
    }
    days_in_month(year, month).is_some_and(|max| day <= max)
}

/// Whole years elapsed between `birth` and `today`.
///
/// A birthday is reached on the same month and day; someone born on
/// 29 February turns a year older on 1 March in common years. Returns `None`
/// when `birth` lies after `today`.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
