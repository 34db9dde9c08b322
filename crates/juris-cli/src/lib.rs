//! # juris-cli — Command-Line Tool for the Jurisdiction Audit Engine
//!
//! Provides the `juris` command-line interface for auditing documents from
//! disk and inspecting the jurisdiction registry.
//!
//! ## Subcommands
//!
//! - `juris audit <FILE>`: Audit a document and print the result as JSON.
//! - `juris resolve <HINT>`: Show the jurisdiction a hint resolves to.
//! - `juris jurisdictions`: List the registered jurisdictions.
//!
//! ```bash
//! juris audit lease.txt --jurisdiction GH --instrument Commercial --offline
//! juris resolve "South Africa"
//! juris jurisdictions --json
//! ```

pub mod audit;
pub mod jurisdictions;
