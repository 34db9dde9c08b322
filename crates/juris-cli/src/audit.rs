//! # Audit Subcommand
//!
//! Reads a document from disk, audits it against the resolved jurisdiction
//! and prints the composite result as pretty JSON.
//!
//! Rates come from the FX service configured through `JURIS_FX_*`, or from
//! the embedded fallback table when `--offline` is given or no service URL
//! is set.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use juris_audit::{AuditEngine, AuditResult};
use juris_core::{DocumentText, InstrumentType, SovereignPin};
use juris_fx::{FxConfig, FxProvider};
use juris_pack::JurisdictionRegistry;

/// Arguments for the `juris audit` subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Path to the UTF-8 document to audit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Jurisdiction hint (e.g. "GH", "Kenya", "south africa").
    #[arg(long, short, default_value = "")]
    pub jurisdiction: String,

    /// Instrument type selector (e.g. "Commercial", "Mortgage", "Conveyance").
    #[arg(long, short)]
    pub instrument: Option<String>,

    /// Sovereign pin forwarded to the FX rate service.
    #[arg(long)]
    pub pin: Option<String>,

    /// Skip the FX rate service and use the embedded fallback rates.
    #[arg(long)]
    pub offline: bool,
}

/// Execute the audit subcommand.
///
/// Returns exit code: 0 on success. Unreadable or malformed documents are
/// operational errors.
pub fn run_audit(args: &AuditArgs) -> Result<u8> {
    let fx = if args.offline {
        FxProvider::offline()
    } else {
        let config = FxConfig::from_env().context("invalid FX rate service configuration")?;
        FxProvider::from_config(&config).context("failed to build FX rate client")?
    };
    tracing::debug!(fx_source = fx.source_name(), "FX provider selected");

    let engine = AuditEngine::new(std::sync::Arc::new(JurisdictionRegistry::new()), fx);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let result = runtime.block_on(audit_file(&engine, args))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(0)
}

/// Audit the document at `args.file` with `engine`.
pub async fn audit_file(engine: &AuditEngine, args: &AuditArgs) -> Result<AuditResult> {
    let document = read_document(&args.file)?;
    let pin = args
        .pin
        .as_deref()
        .map(SovereignPin::new)
        .transpose()
        .context("invalid --pin")?;
    let instrument = args
        .instrument
        .as_deref()
        .map(InstrumentType::from_selector)
        .unwrap_or_default();

    Ok(engine
        .audit_document(&document, &args.jurisdiction, instrument, pin.as_ref())
        .await)
}

fn read_document(path: &Path) -> Result<DocumentText> {
    let file = File::open(path)
        .with_context(|| format!("failed to open document: {}", path.display()))?;
    DocumentText::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read document: {}", path.display()))
}
