//! # nordval-identity: National Identity Numbers
//!
//! Classifies, validates, normalizes and parses personal identity numbers
//! for Sweden (personnummer), Norway (fødselsnummer), Finland
//! (henkilötunnus), Denmark (CPR-nummer) and the German birthdate
//! identifier.
//!
//! ## Pipeline
//!
//! Every country runs the same state machine; the first failing stage
//! rejects with its [`RejectionKind`]:
//!
//! ```text
//! raw input
//!   → structural match (standard | temporary pattern)
//!   → field extraction (day, month, year, serial, control)
//!   → century resolution        (century)
//!   → calendar validation       (nordval_core::calendar)
//!   → control digit validation  (nordval_core::checksum)
//!   → accepted: normalized form, birth date, gender
//! ```
//!
//! The country is a closed [`Country`] enum; dispatch is an exhaustive
//! `match`, so adding a country forces every stage to handle it.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use nordval_core::FixedClock;
//! use nordval_identity::{Country, NationalIdentifierValidator};
//!
//! let clock = FixedClock::parse_date("2010-01-01").unwrap();
//! let validator = NationalIdentifierValidator::new(Arc::new(clock));
//!
//! let sweden = validator.for_country(Country::Sweden);
//! assert_eq!(sweden.normalize("640101-8780").unwrap(), "196401018780");
//! assert!(validator.is_valid_in_any_country("121043-2312"));
//! ```
//!
//! [`RejectionKind`]: nordval_core::RejectionKind

#![deny(missing_docs)]

pub mod century;
mod classify;
pub mod country;
mod denmark;
pub mod error;
mod finland;
mod germany;
mod norway;
pub mod parsed;
mod sweden;
pub mod validator;

pub use country::Country;
pub use error::IdentifierError;
pub use parsed::{Gender, ParsedIdentity};
pub use validator::{CountryValidator, NationalIdentifierValidator};
