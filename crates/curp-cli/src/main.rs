//! # curp CLI entry point
//!
//! Parses command-line arguments, installs the log subscriber and runs the
//! validation.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use curp_cli::validate::{run_validate, ValidateArgs};

/// Extract the data encoded in a CURP and validate it against a name.
#[derive(Parser, Debug)]
#[command(name = "curp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
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

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "curp CLI starting");

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
