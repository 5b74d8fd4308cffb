//! Parsed view of a national identifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender encoded in an identifier.
///
/// Only the Danish scheme is read for gender; every other country reports
/// [`Gender::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Not encoded, or not read for this country.
    #[default]
    Unknown,
    /// Even Danish serial.
    Female,
    /// Odd Danish serial.
    Male,
}

impl Gender {
    /// Danish rule: an odd serial number is male, an even one female.
    pub fn from_serial_parity(serial: u32) -> Self {
        if serial % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Lowercase name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an identifier says about its holder.
///
/// Produced fresh per call. An identifier that fails validation yields
/// [`ParsedIdentity::invalid()`]: `valid == false` and every other field
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIdentity {
    /// Whether the identifier passed every validation stage.
    pub valid: bool,
    /// Gender read from the serial, where the scheme encodes it.
    pub gender: Gender,
    /// Birth date encoded in the identifier.
    pub date_of_birth: Option<NaiveDate>,
    /// Whole years between the birth date and the clock's current date.
    /// `None` when the birth date lies in the future.
    pub age_in_years: Option<u32>,
    /// Whether the identifier is a temporary (coordination) number.
    pub temporary: bool,
}

impl ParsedIdentity {
    /// The result for input that failed validation.
    pub fn invalid() -> Self {
        Self::default()
    }
}
