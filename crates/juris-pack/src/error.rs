//! Pack-specific error types.
//!
//! Pack data is compiled in, so these errors indicate a defect in a
//! jurisdiction module rather than bad user input. They carry the rule id
//! and the offending pattern so the defect can be located directly.

use thiserror::Error;

/// Errors that can occur while compiling pack data.
#[derive(Debug, Error)]
pub enum PackError {
    /// A heuristic trigger or negative pattern failed to compile.
    #[error("heuristic {heuristic_id}: invalid pattern {pattern:?}: {source}")]
    InvalidHeuristicPattern {
        heuristic_id: String,
        pattern: String,
        source: regex::Error,
    },

    /// A currency detection pattern failed to compile.
    #[error("currency pattern for {currency}: invalid pattern {pattern:?}: {source}")]
    InvalidCurrencyPattern {
        currency: String,
        pattern: String,
        source: regex::Error,
    },

    /// A currency detection pattern has no `amount` capture group.
    #[error("currency pattern for {currency} has no `amount` capture group: {pattern:?}")]
    MissingAmountGroup { currency: String, pattern: String },
}

/// Convenience alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;
