//! Building blocks shared by the per-country classifiers.

use std::ops::Range;
use std::sync::OnceLock;

use chrono::NaiveDate;
use nordval_core::{calendar, digits, RejectionKind};
use regex::Regex;

use crate::parsed::Gender;

/// A structural pattern compiled on first use and shared process-wide.
pub(crate) struct Pattern {
    source: &'static str,
    compiled: OnceLock<Option<Regex>>,
}

impl Pattern {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// A pattern that fails to compile matches nothing.
    pub(crate) fn is_match(&self, input: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(input))
    }

    pub(crate) fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(self.source).ok())
            .as_ref()
    }
}

/// Which pattern an identifier matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Standard,
    /// Day (or date) field shifted into a reserved band.
    Temporary,
}

impl NumberKind {
    /// Try the standard pattern, then the temporary one if the country has one.
    pub(crate) fn detect(
        input: &str,
        standard: &Pattern,
        temporary: Option<&Pattern>,
    ) -> Result<Self, RejectionKind> {
        if standard.is_match(input) {
            Ok(Self::Standard)
        } else if temporary.is_some_and(|p| p.is_match(input)) {
            Ok(Self::Temporary)
        } else {
            Err(RejectionKind::StructuralMismatch)
        }
    }

    /// Undo the temporary-number day offset.
    pub(crate) fn birth_day(self, encoded_day: u32, offset: u32) -> Result<u32, RejectionKind> {
        match self {
            Self::Standard => Ok(encoded_day),
            Self::Temporary => encoded_day
                .checked_sub(offset)
                .ok_or(RejectionKind::InvalidCalendarDate),
        }
    }

    pub(crate) fn is_temporary(self) -> bool {
        self == Self::Temporary
    }
}

/// An identifier that passed every stage of its country's pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Classified {
    pub(crate) normalized: String,
    pub(crate) birth_date: NaiveDate,
    pub(crate) gender: Gender,
    pub(crate) kind: NumberKind,
}

/// Remove every occurrence of the given separator characters.
pub(crate) fn strip_separators(input: &str, separators: &[char]) -> String {
    input.chars().filter(|c| !separators.contains(c)).collect()
}

/// Parse the fixed-width digit field at `range`.
pub(crate) fn field(value: &str, range: Range<usize>) -> Result<u32, RejectionKind> {
    value
        .get(range)
        .and_then(digits::parse_field)
        .ok_or(RejectionKind::StructuralMismatch)
}

/// Check the calendar and build the birth date.
pub(crate) fn birth_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, RejectionKind> {
    if !calendar::is_valid_date(year, month, day) {
        return Err(RejectionKind::InvalidCalendarDate);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(RejectionKind::InvalidCalendarDate)
}
