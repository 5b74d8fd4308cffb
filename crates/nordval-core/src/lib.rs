//! # nordval-core: Foundational Primitives for Nordic Identifiers
//!
//! This crate is the leaf of the nordval workspace. It holds the pure,
//! allocation-light building blocks that both identifier pipelines share:
//! the national identity number classifiers in `nordval-identity` and the
//! bank account matcher in `nordval-bank`.
//!
//! ## Key Design Principles
//!
//! 1. **Checksums are pure functions over digit strings.** Every scheme in
//!    [`checksum`] takes `&str`, never panics, and answers `false` for input
//!    that is not made of ASCII digits. Callers classify with regexes first.
//!
//! 2. **One rejection taxonomy.** [`RejectionKind`] is the single closed set
//!    of reasons an identifier can be refused. Adding a reason forces every
//!    consumer to handle it.
//!
//! 3. **Time is injected.** Nothing in this workspace reads the wall clock
//!    directly. Code that needs "now" takes a [`Clock`]; tests pin it with
//!    [`FixedClock`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nordval-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![deny(missing_docs)]

pub mod calendar;
pub mod checksum;
pub mod clock;
pub mod digits;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use calendar::{age_in_years, days_in_month, is_leap_year, is_valid_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RejectionKind;
