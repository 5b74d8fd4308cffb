//! # nordval CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nordval_core::FixedClock;
use tracing_subscriber::EnvFilter;

use nordval_cli::bank::{run_bank, BankArgs};
use nordval_cli::identity::{run_id, IdArgs};
use nordval_cli::{Settings, EXIT_USAGE};

/// Nordic bank account and national identity number validation.
#[derive(Parser, Debug)]
#[command(name = "nordval", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Bank rule table (JSON, or YAML by extension) replacing the built-in
    /// Swedish table.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long, global = true, value_parser = FixedClock::parse_date)]
    today: Option<FixedClock>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bank clearing and account numbers.
    Bank(BankArgs),

    /// National identity numbers.
    Id(IdArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings {
        rules: cli.rules,
        today: cli.today,
        json: cli.json,
    };

    let result = match &cli.command {
        Commands::Bank(args) => run_bank(args, &settings),
        Commands::Id(args) => run_id(args, &settings),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
