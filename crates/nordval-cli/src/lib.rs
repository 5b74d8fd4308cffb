//! # nordval-cli: Command-Line Front End
//!
//! Provides the `nordval` binary over the library crates.
//!
//! ## Subcommands
//!
//! - `nordval bank identify|validate|assess`: Swedish clearing and account
//!   numbers.
//! - `nordval id validate|normalize|parse`: national identity numbers.
//!
//! ```bash
//! nordval bank identify 8123-5
//! nordval bank validate 1110 0000100
//! nordval --today 2010-01-01 id parse 19640101-8780 --country SE
//! nordval --rules banks.yaml --json bank validate "8123-5 123 450 9"
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | The input was accepted |
//! | 1 | The input was rejected |
//! | 2 | Usage or configuration error |
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers take parsed arguments
//!   and [`Settings`] and return an exit code.
//! - Handlers delegate to the library crates. No validation logic here.

pub mod bank;
pub mod identity;

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use nordval_bank::{BankRuleMatcher, RuleTable};
use nordval_core::{Clock, FixedClock, RejectionKind, SystemClock};
use nordval_identity::NationalIdentifierValidator;
use serde::Serialize;

pub const EXIT_ACCEPTED: u8 = 0;
pub const EXIT_REJECTED: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Bank rule table replacing the built-in Swedish one.
    pub rules: Option<PathBuf>,
    /// Pinned "today"; the system clock otherwise.
    pub today: Option<FixedClock>,
    /// Emit JSON instead of human-readable text.
    pub json: bool,
}

impl Settings {
    /// Load the configured bank rule table.
    pub fn bank_matcher(&self) -> Result<BankRuleMatcher> {
        let table = match &self.rules {
            Some(path) => RuleTable::from_path(path)
                .with_context(|| format!("failed to load bank rules from {}", path.display()))?,
            None => RuleTable::swedish().context("built-in bank rule table is invalid")?,
        };
        Ok(BankRuleMatcher::new(table))
    }

    pub fn identifier_validator(&self) -> NationalIdentifierValidator {
        let clock: Arc<dyn Clock> = match self.today {
            Some(fixed) => Arc::new(fixed),
            None => Arc::new(SystemClock),
        };
        NationalIdentifierValidator::new(clock)
    }

    /// Print `value` as JSON, or `human` when JSON output is off.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
            println!("{json}");
        } else {
            println!("{}", human());
        }
        Ok(())
    }

    /// Report a rejection and return [`EXIT_REJECTED`].
    pub fn reject(&self, input: &str, kind: RejectionKind, error: &dyn Display) -> Result<u8> {
        let rejection = Rejection {
            input: input.to_string(),
            kind,
            message: error.to_string(),
        };
        self.emit(&rejection, || format!("rejected: {error}"))?;
        Ok(EXIT_REJECTED)
    }
}

/// JSON shape of a rejected input.
#[derive(Debug, Serialize)]
pub struct Rejection {
    pub input: String,
    pub kind: RejectionKind,
    pub message: String,
}
