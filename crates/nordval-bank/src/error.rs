//! Error types for bank operations and rule table loading.

use nordval_core::RejectionKind;
use thiserror::Error;

/// A bank operation that could not produce a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// No single bank could be identified from the clearing number.
    #[error("bank could not be identified from {input:?}: {kind}")]
    Unidentified {
        /// The value as supplied by the caller.
        input: String,
        /// Why identification failed.
        kind: RejectionKind,
    },

    /// The account number could not be validated against any rule.
    #[error("account number {input:?} could not be validated: {kind}")]
    Invalid {
        /// The value as supplied by the caller.
        input: String,
        /// The furthest stage any candidate rule reached.
        kind: RejectionKind,
    },
}

impl BankError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Unidentified { kind, .. } | Self::Invalid { kind, .. } => *kind,
        }
    }
}

/// A bank rule table that could not be loaded.
#[derive(Error, Debug)]
pub enum RuleTableError {
    /// The table file could not be read.
    #[error("cannot read rule table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The table is not valid JSON for the record layout.
    #[error("invalid JSON rule table: {0}")]
    Json(#[from] serde_json::Error),

    /// The table is not valid YAML for the record layout.
    #[error("invalid YAML rule table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A clearing or number pattern does not compile.
    #[error("rule for {bank:?} has an invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        bank: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The checksum algorithm is neither Mod10 nor Mod11.
    #[error("rule for {bank:?} uses unsupported modulo {modulo}")]
    UnsupportedModulus { bank: String, modulo: u32 },

    /// The digit counts are inconsistent.
    #[error("rule for {bank:?} has an invalid digit layout: {reason}")]
    InvalidLayout { bank: String, reason: String },

    /// The table contains no rules.
    #[error("rule table contains no rules")]
    Empty,
}
