//! # juris-audit -- Audit Evaluation Engine
//!
//! Ties the stack together: jurisdiction resolution (`juris-core`),
//! heuristics, detection and duty (`juris-pack`), and FX conversion
//! (`juris-fx`) into one composite [`AuditResult`] per call.
//!
//! The engine holds no mutable state. The registry is shared behind an
//! `Arc`, and the only suspension point is the FX fetch, awaited before
//! the duty is computed.

pub mod engine;
pub mod result;

pub use engine::AuditEngine;
pub use result::AuditResult;
