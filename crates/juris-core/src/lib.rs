#![deny(missing_docs)]

//! # juris-core — Foundational Types for the Audit Stack
//!
//! This crate is the leaf of the workspace dependency graph. It defines the
//! primitives every other crate speaks in: which jurisdiction a document is
//! audited under, which currency an amount is denominated in, what kind of
//! legal instrument is being assessed, and what counts as valid input text.
//!
//! ## Key Design Principles
//!
//! 1. **Closed jurisdiction set.** [`JurisdictionCode`] is a plain enum.
//!    Every consumer matches on it exhaustively, so adding a jurisdiction
//!    forces every dispatch site to handle it at compile time.
//!
//! 2. **Total resolution.** [`resolve`] maps any hint string to a code and
//!    never fails. Unknown input lands on [`JurisdictionCode::Global`].
//!
//! 3. **Validated input at the edge.** [`DocumentText`] is the only way text
//!    enters the engine. Invalid UTF-8 and embedded NULs are rejected with
//!    [`ValidationError::MalformedInput`] before any rule runs.
//!
//! 4. **Decimal money.** Amounts and rates are `rust_decimal::Decimal`,
//!    never `f64`, so duty rounding is exact.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `juris-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod currency;
pub mod digest;
pub mod document;
pub mod error;
pub mod identity;
pub mod instrument;
pub mod jurisdiction;
pub mod money;

// Re-export primary types for ergonomic imports.
pub use currency::{CurrencyCode, CurrencyPair};
pub use digest::DocumentDigest;
pub use document::DocumentText;
pub use error::{JurisError, ValidationError};
pub use identity::SovereignPin;
pub use instrument::InstrumentType;
pub use jurisdiction::{resolve, JurisdictionCode};
pub use money::{convert, MonetaryValue};
