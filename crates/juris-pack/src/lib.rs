//! # juris-pack — Jurisdiction Packs
//!
//! Machine-readable statutory configuration for each supported
//! jurisdiction, plus the pure evaluators that run over it:
//!
//! - **Heuristics** ([`heuristic`]): declarative compliance checks pairing a
//!   trigger pattern with an optional "mandatory clause" negative pattern.
//! - **Detector** ([`detector`]): ordered currency patterns that extract the
//!   first monetary mention from a document.
//! - **Duty** ([`duty`]): instrument-type tariff tables and the stamp duty
//!   calculator.
//! - **Jurisdictions** ([`jurisdictions`]): one data module per region.
//! - **Registry** ([`registry`]): compiles each region's data into an
//!   immutable [`JurisdictionConfig`] and hands it out by code.
//!
//! ## Data Format
//!
//! Packs are compiled into the binary. They are versioned with the crate and
//! cannot be mutated at runtime; changing a rate or a rule is a code change
//! that goes through review like any other.

pub mod config;
pub mod detector;
pub mod duty;
pub mod error;
pub mod heuristic;
pub mod jurisdictions;
pub mod registry;

// Re-export primary types.
pub use config::{get_config, JurisdictionConfig, JurisdictionSummary};
pub use detector::MonetaryDetector;
pub use duty::{compute_duty, DutyResult, TariffEntry, TariffTable};
pub use error::PackError;
pub use heuristic::{evaluate_heuristics, HeuristicSpec, LegalHeuristic};
pub use registry::JurisdictionRegistry;
