//! The composite audit result handed to the rendering layer.

use juris_core::{DocumentDigest, JurisdictionCode, MonetaryValue};
use juris_fx::FxRate;
use juris_pack::{DutyResult, LegalHeuristic};
use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of one audit call.
///
/// Serialized in camelCase. `activeFlags`, `detectedValue` and `dutyResult`
/// are the core fields; `jurisdiction`, `localValue`, `fxRate` and
/// `documentDigest` are derived deterministically from the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Resolved jurisdiction.
    pub jurisdiction: JurisdictionCode,
    /// Heuristics that fired, in declaration order.
    pub active_flags: Vec<LegalHeuristic>,
    /// First monetary mention in the document.
    pub detected_value: MonetaryValue,
    /// Detected amount in local currency. `None` when nothing was detected
    /// or no rate was available to convert it.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub local_value: Option<Decimal>,
    /// Rate used for conversion, when one was applied.
    pub fx_rate: Option<FxRate>,
    /// Duty estimate. `None` unless a positive value was detected.
    pub duty_result: Option<DutyResult>,
    /// SHA-256 of the audited text.
    pub document_digest: DocumentDigest,
}

impl AuditResult {
    /// Ids of the active flags, in order.
    pub fn flag_ids(&self) -> Vec<&str> {
        self.active_flags.iter().map(LegalHeuristic::id).collect()
    }

    /// Whether conversion used a fallback rate.
    pub fn used_fallback_rate(&self) -> bool {
        self.fx_rate.as_ref().is_some_and(|r| r.is_fallback)
    }
}
