//! # Error Hierarchy
//!
//! Validation errors for the audit stack, built with `thiserror`.
//!
//! The engine is designed to degrade rather than fail: unresolved
//! jurisdictions fall back to `GLOBAL`, FX outages fall back to embedded
//! rates, and unparseable amounts count as "not detected". What remains here
//! are the contract violations on input that must fail fast.

use thiserror::Error;

/// Top-level error type for the audit stack.
#[derive(Error, Debug)]
pub enum JurisError {
    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for domain primitives and audit input.
///
/// Each variant carries enough context for an operator (or an API client)
/// to see what was rejected without re-running the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Document text is not auditable text (binary content, bad encoding).
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// Sovereign pin is empty or contains characters that cannot travel in
    /// an HTTP header.
    #[error("invalid sovereign pin: {0}")]
    InvalidPin(String),

    /// Currency code is not one of the supported ISO 4217 codes.
    #[error("unknown currency code: \"{0}\"")]
    UnknownCurrency(String),

    /// Currency pair key is not of the form `BASE_QUOTE`.
    #[error("invalid currency pair: \"{0}\" (expected BASE_QUOTE, e.g. USD_GHS)")]
    InvalidCurrencyPair(String),
}

impl ValidationError {
    /// Shorthand for a [`ValidationError::MalformedInput`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}
