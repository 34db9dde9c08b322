//! # Resolve and Jurisdictions Subcommands
//!
//! `juris resolve <HINT>` prints the jurisdiction a free-form hint maps to.
//! `juris jurisdictions` lists every registered jurisdiction.

use anyhow::Result;
use clap::Args;

use juris_pack::{JurisdictionRegistry, JurisdictionSummary};

/// Arguments for the `juris resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Free-form jurisdiction hint. Unrecognized hints resolve to GLOBAL.
    #[arg(value_name = "HINT")]
    pub hint: String,

    /// Print the full summary as JSON instead of one line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `juris jurisdictions` subcommand.
#[derive(Args, Debug)]
pub struct JurisdictionsArgs {
    /// Print summaries as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let registry = JurisdictionRegistry::new();
    let config = registry.resolve(&args.hint);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.summary())?);
    } else {
        println!("{}", config.describe());
    }
    Ok(0)
}

/// Execute the jurisdictions subcommand.
pub fn run_jurisdictions(args: &JurisdictionsArgs) -> Result<u8> {
    let summaries = JurisdictionRegistry::new().summaries();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for line in table_lines(&summaries) {
            println!("{line}");
        }
    }
    Ok(0)
}

fn table_lines(summaries: &[JurisdictionSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|s| {
            format!(
                "{:<7} {:<16} {} ({:<2}) {:>2} heuristics",
                s.code.as_str(),
                s.display_name,
                s.currency_code.as_str(),
                s.currency_symbol,
                s.heuristic_count
            )
        })
        .collect()
}
