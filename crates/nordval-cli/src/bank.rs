//! # Bank CLI: Clearing and account numbers.
//!
//! ```bash
//! nordval bank identify 8123-5
//! nordval bank validate 8123-5 1234509
//! nordval bank validate "8123-5 123 450 9"
//! nordval bank assess 8123 1234567
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use nordval_bank::{BankAccountResult, BankRuleMatcher};

use crate::{Settings, EXIT_ACCEPTED, EXIT_REJECTED};

/// Bank subcommand arguments.
#[derive(Args, Debug)]
pub struct BankArgs {
    #[command(subcommand)]
    pub command: BankCommand,
}

/// Available bank subcommands.
#[derive(Subcommand, Debug)]
pub enum BankCommand {
    /// Identify the bank behind a clearing number.
    Identify {
        /// Clearing number, optionally followed by the account number.
        clearing: String,
    },

    /// Validate an account number.
    ///
    /// With one argument the clearing and account numbers are read as a
    /// single combined number.
    Validate {
        /// Clearing number, or the combined number.
        number: String,

        /// Account number.
        account: Option<String>,
    },

    /// Report the bank and whether the account passes its rule.
    Assess {
        /// Clearing number.
        clearing: String,

        /// Account number.
        account: String,
    },
}

/// Execute the bank subcommand.
pub fn run_bank(args: &BankArgs, settings: &Settings) -> Result<u8> {
    let matcher = settings.bank_matcher()?;
    match &args.command {
        BankCommand::Identify { clearing } => run_identify(&matcher, clearing, settings),
        BankCommand::Validate { number, account } => {
            run_validate(&matcher, number, account.as_deref(), settings)
        }
        BankCommand::Assess { clearing, account } => {
            run_assess(&matcher, clearing, account, settings)
        }
    }
}

fn run_identify(matcher: &BankRuleMatcher, clearing: &str, settings: &Settings) -> Result<u8> {
    match matcher.identify(clearing) {
        Ok(identity) => {
            settings.emit(&identity, || match &identity.account_number {
                Some(account) => {
                    format!("{}  {}  {account}", identity.name, identity.formatted_clearing())
                }
                None => format!("{}  {}", identity.name, identity.formatted_clearing()),
            })?;
            Ok(EXIT_ACCEPTED)
        }
        Err(err) => settings.reject(clearing, err.kind(), &err),
    }
}

fn run_validate(
    matcher: &BankRuleMatcher,
    number: &str,
    account: Option<&str>,
    settings: &Settings,
) -> Result<u8> {
    let (input, outcome) = match account {
        Some(account) => (
            format!("{number} {account}"),
            matcher.validate(number, account),
        ),
        None => (number.to_string(), matcher.validate_combined(number)),
    };

    match outcome {
        Ok(result) => {
            settings.emit(&result, || describe(&result))?;
            Ok(EXIT_ACCEPTED)
        }
        Err(err) => settings.reject(&input, err.kind(), &err),
    }
}

fn run_assess(
    matcher: &BankRuleMatcher,
    clearing: &str,
    account: &str,
    settings: &Settings,
) -> Result<u8> {
    match matcher.assess(clearing, account) {
        Ok(result) => {
            settings.emit(&result, || describe(&result))?;
            Ok(if result.valid { EXIT_ACCEPTED } else { EXIT_REJECTED })
        }
        Err(err) => settings.reject(clearing, err.kind(), &err),
    }
}

fn describe(result: &BankAccountResult) -> String {
    format!(
        "{}  {}  {}  {}",
        result.name,
        result.formatted_clearing(),
        result.account_number,
        if result.valid { "valid" } else { "invalid" }
    )
}
