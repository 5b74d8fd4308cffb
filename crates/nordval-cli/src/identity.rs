//! # Identity CLI: National identity numbers.
//!
//! Without `--country`, `validate` and `normalize` try SE, NO, FI and DK in
//! that order and report the first that accepts. German numbers need
//! `--country DE`.
//! Ages are computed against `--today` when given.

use anyhow::Result;
use clap::{Args, Subcommand};
use nordval_identity::{Country, NationalIdentifierValidator, ParsedIdentity};
use serde::Serialize;

use crate::{Settings, EXIT_ACCEPTED, EXIT_REJECTED};

/// Identity subcommand arguments.
#[derive(Args, Debug)]
pub struct IdArgs {
    #[command(subcommand)]
    pub command: IdCommand,
}

/// Available identity subcommands.
#[derive(Subcommand, Debug)]
pub enum IdCommand {
    /// Check whether a number is valid.
    Validate {
        text: String,

        /// Country code (SE, NO, FI, DK, DE) or English name.
        #[arg(long)]
        country: Option<Country>,
    },

    /// Print the canonical form of a number.
    Normalize {
        text: String,

        /// Country code (SE, NO, FI, DK, DE) or English name.
        #[arg(long)]
        country: Option<Country>,
    },

    /// Print birth date, gender and age encoded in a number.
    Parse {
        text: String,

        /// Country code (SE, NO, FI, DK, DE) or English name.
        #[arg(long)]
        country: Country,
    },
}

/// JSON shape of an accepted `validate` or `normalize`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Accepted<'a> {
    input: &'a str,
    country: Country,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<String>,
}

/// Execute the identity subcommand.
pub fn run_id(args: &IdArgs, settings: &Settings) -> Result<u8> {
    let validator = settings.identifier_validator();
    match &args.command {
        IdCommand::Validate { text, country } => {
            run_validate(&validator, text, *country, settings)
        }
        IdCommand::Normalize { text, country } => {
            run_normalize(&validator, text, *country, settings)
        }
        IdCommand::Parse { text, country } => run_parse(&validator, text, *country, settings),
    }
}

fn resolve_country(
    validator: &NationalIdentifierValidator,
    text: &str,
    country: Option<Country>,
) -> Result<Country, nordval_identity::IdentifierError> {
    match country {
        Some(country) => Ok(country),
        None => validator.detect(text),
    }
}

fn run_validate(
    validator: &NationalIdentifierValidator,
    text: &str,
    country: Option<Country>,
    settings: &Settings,
) -> Result<u8> {
    let country = match resolve_country(validator, text, country) {
        Ok(country) => country,
        Err(err) => return settings.reject(text, err.kind(), &err),
    };

    match validator.for_country(country).rejection(text) {
        None => {
            let accepted = Accepted {
                input: text,
                country,
                normalized: None,
            };
            settings.emit(&accepted, || format!("valid ({})", country.name()))?;
            Ok(EXIT_ACCEPTED)
        }
        Some(kind) => {
            let message = format!("not a valid {} identity number: {kind}", country.name());
            settings.reject(text, kind, &message)
        }
    }
}

fn run_normalize(
    validator: &NationalIdentifierValidator,
    text: &str,
    country: Option<Country>,
    settings: &Settings,
) -> Result<u8> {
    let normalized = resolve_country(validator, text, country).and_then(|country| {
        let normalized = validator.for_country(country).normalize(text)?;
        Ok((country, normalized))
    });

    match normalized {
        Ok((country, normalized)) => {
            let accepted = Accepted {
                input: text,
                country,
                normalized: Some(normalized.clone()),
            };
            settings.emit(&accepted, || normalized)?;
            Ok(EXIT_ACCEPTED)
        }
        Err(err) => settings.reject(text, err.kind(), &err),
    }
}

fn run_parse(
    validator: &NationalIdentifierValidator,
    text: &str,
    country: Country,
    settings: &Settings,
) -> Result<u8> {
    let parsed = validator.for_country(country).parse(text);
    settings.emit(&parsed, || describe(&parsed))?;
    Ok(if parsed.valid { EXIT_ACCEPTED } else { EXIT_REJECTED })
}

fn describe(parsed: &ParsedIdentity) -> String {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    format!(
        "valid:         {}\ngender:        {}\ndate of birth: {}\nage:           {}\ntemporary:     {}",
        parsed.valid,
        parsed.gender.as_str(),
        or_dash(parsed.date_of_birth.map(|d| d.to_string())),
        or_dash(parsed.age_in_years.map(|a| a.to_string())),
        parsed.temporary,
    )
}
