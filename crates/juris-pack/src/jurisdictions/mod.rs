//! # Jurisdiction Data Modules
//!
//! One module per supported region. Each exposes `profile()`, returning the
//! uncompiled statutory data for that region: currency, ordered detector
//! patterns, ordered heuristic rules, tariff schedule and description.
//!
//! Adding a jurisdiction means adding a [`JurisdictionCode`] variant, a
//! module here, and an arm in [`profile`]. The match is exhaustive, so the
//! compiler points at every place that needs the new region.

pub mod ghana;
pub mod global;
pub mod kenya;
pub mod nigeria;
pub mod south_africa;
pub mod united_kingdom;
pub mod united_states;

use juris_core::{CurrencyCode, JurisdictionCode};

use crate::detector::CurrencyPatternSpec;
use crate::duty::TariffTable;
use crate::heuristic::HeuristicSpec;

/// Uncompiled statutory data for one jurisdiction.
#[derive(Debug, Clone)]
pub struct JurisdictionProfile {
    pub code: JurisdictionCode,
    pub display_name: &'static str,
    /// Local currency; detected amounts in it are used as-is.
    pub currency: CurrencyCode,
    /// Foreign currency that is converted into `currency` before duty is
    /// computed. `None` where the local currency is already the reference.
    pub foreign_reference: Option<CurrencyCode>,
    pub currency_patterns: &'static [CurrencyPatternSpec],
    pub heuristics: &'static [HeuristicSpec],
    pub tariff: TariffTable,
    pub description: &'static str,
}

/// Statutory data for `code`.
pub fn profile(code: JurisdictionCode) -> JurisdictionProfile {
    match code {
        JurisdictionCode::Ghana => ghana::profile(),
        JurisdictionCode::Nigeria => nigeria::profile(),
        JurisdictionCode::Kenya => kenya::profile(),
        JurisdictionCode::SouthAfrica => south_africa::profile(),
        JurisdictionCode::UnitedKingdom => united_kingdom::profile(),
        JurisdictionCode::UnitedStates => united_states::profile(),
        JurisdictionCode::Global => global::profile(),
    }
}
