//! # Rejection Taxonomy
//!
//! Every refusal in the workspace, whether of a national identity number or
//! of a bank account number, is described by exactly one [`RejectionKind`].
//!
//! ## Design
//!
//! - Rejections are permanent consequences of the input. None of them is
//!   transient and none is worth retrying.
//! - Pipeline stages return `Result<_, RejectionKind>`. The public operations
//!   in the downstream crates wrap the first terminal kind together with the
//!   original input and the country or bank context.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an identifier was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// No value was supplied where one is required.
    #[error("a value is required")]
    MissingInput,

    /// Stripping separators left nothing to validate.
    #[error("the value contains no digits")]
    NoDigitsPresent,

    /// The value does not match any accepted format.
    #[error("the value does not match any accepted format")]
    StructuralMismatch,

    /// The clearing number resolves to more than one bank.
    #[error("the clearing number matches more than one bank")]
    AmbiguousBankMatch,

    /// The serial number and two-digit year fall outside every defined range.
    #[error("the birth year cannot be placed in a century")]
    UndefinedCentury,

    /// The encoded date does not exist in the calendar.
    #[error("the encoded date is not a valid calendar date")]
    InvalidCalendarDate,

    /// The control digit(s) do not match.
    #[error("the control digits do not match")]
    ChecksumMismatch,

    /// No validation is implemented for the requested country.
    #[error("no validation is implemented for the country")]
    UnknownCountry,
}

impl RejectionKind {
    /// Returns all rejection kinds in pipeline order.
    pub fn all() -> &'static [RejectionKind] {
        &[
            Self::MissingInput,
            Self::NoDigitsPresent,
            Self::StructuralMismatch,
            Self::AmbiguousBankMatch,
            Self::UndefinedCentury,
            Self::InvalidCalendarDate,
            Self::ChecksumMismatch,
            Self::UnknownCountry,
        ]
    }

    /// Returns the snake_case identifier used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::NoDigitsPresent => "no_digits_present",
            Self::StructuralMismatch => "structural_mismatch",
            Self::AmbiguousBankMatch => "ambiguous_bank_match",
            Self::UndefinedCentury => "undefined_century",
            Self::InvalidCalendarDate => "invalid_calendar_date",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::UnknownCountry => "unknown_country",
        }
    }
}
