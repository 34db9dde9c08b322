//! # GLOBAL
//!
//! Fallback for unresolved hints: USD detection only, no heuristics, and a
//! zero-rate tariff.

use juris_core::{CurrencyCode, JurisdictionCode};

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, USD};
use crate::duty::TariffTable;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::Global,
        display_name: "Global",
        currency: CurrencyCode::Usd,
        foreign_reference: None,
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: &[],
        tariff: TariffTable::unscheduled("relevant revenue authority"),
        description: "No jurisdiction-specific rules; generic USD value detection only.",
    }
}
