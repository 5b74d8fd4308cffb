//! Error types for national identifier operations.

use nordval_core::RejectionKind;
use thiserror::Error;

use crate::country::Country;

/// A national identifier operation that could not produce a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier failed one stage of its country's pipeline.
    #[error("national identifier {input:?} is not valid for {country}: {kind}")]
    Rejected {
        /// The identifier as supplied by the caller.
        input: String,
        /// The country whose rules were applied.
        country: Country,
        /// The first stage that failed.
        kind: RejectionKind,
    },

    /// No detectable country accepts the identifier.
    #[error("national identifier {input:?} is not valid in any supported country")]
    NoCountryMatched {
        /// The identifier as supplied by the caller.
        input: String,
    },

    /// The requested country has no identifier scheme.
    #[error("there is no validation implemented for country {0:?}")]
    UnknownCountry(String),
}

impl IdentifierError {
    /// The rejection kind behind this error.
    ///
    /// An any-country miss reports [`RejectionKind::MissingInput`] for empty
    /// input and [`RejectionKind::StructuralMismatch`] otherwise.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Rejected { kind, .. } => *kind,
            Self::NoCountryMatched { input } if input.is_empty() => RejectionKind::MissingInput,
            Self::NoCountryMatched { .. } => RejectionKind::StructuralMismatch,
            Self::UnknownCountry(_) => RejectionKind::UnknownCountry,
        }
    }
}
