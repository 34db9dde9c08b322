//! # juris CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use juris_cli::audit::{run_audit, AuditArgs};
use juris_cli::jurisdictions::{run_jurisdictions, run_resolve, JurisdictionsArgs, ResolveArgs};

/// Jurisdiction-aware compliance audit for legal documents.
///
/// Flags statutory compliance gaps, extracts the contract value, converts it
/// to the local currency and estimates stamp or transfer duty.
#[derive(Parser, Debug)]
#[command(name = "juris", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit a document and print the composite result as JSON.
    Audit(AuditArgs),

    /// Resolve a free-form jurisdiction hint.
    Resolve(ResolveArgs),

    /// List the registered jurisdictions.
    Jurisdictions(JurisdictionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v flags when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Audit(args) => run_audit(&args),
        Commands::Resolve(args) => run_resolve(&args),
        Commands::Jurisdictions(args) => run_jurisdictions(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
