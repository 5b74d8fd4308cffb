//! # nordval-bank: Bank Clearing and Account Numbers
//!
//! Identifies the bank behind a Swedish clearing number and validates
//! clearing + account number combinations against an ordered table of bank
//! rules.
//!
//! - **Rule table** (`table.rs`, `rule.rs`): records of
//!   `{name, clearingRegex, numberRegex, modulo, clearing, account, control}`
//!   loaded from JSON or YAML and compiled once. A Swedish table is embedded
//!   in the crate.
//!
//! - **Matcher** (`matcher.rs`): `identify`, `validate`,
//!   `validate_combined` and `assess`, each stripping separators, selecting
//!   candidate rules in table order and delegating the control segment to
//!   the Mod10 or Mod11 check in `nordval-core`.
//!
//! ## Rule Order
//!
//! The table is ordered. Validation returns the first rule that accepts the
//! number end to end. Identification is stricter: every rule whose clearing
//! pattern matches must name the same bank.
//!
//! ## Crate Policy
//!
//! - Depends only on `nordval-core` internally.
//! - Rule tables are immutable after loading and safe to share between
//!   threads.

pub mod account;
pub mod error;
pub mod matcher;
pub mod rule;
pub mod table;

pub use account::{BankAccountResult, BankIdentity};
pub use error::{BankError, RuleTableError};
pub use matcher::BankRuleMatcher;
pub use rule::{BankRule, BankRuleRecord, Modulus};
pub use table::RuleTable;
