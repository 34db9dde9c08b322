//! # Jurisdiction Codes & Hint Resolution
//!
//! [`JurisdictionCode`] is the closed set of legal regions the engine knows
//! how to audit. [`resolve`] turns whatever the host application passes as a
//! region hint ("gh", "Ghana-Accra", "en-KE", "", …) into one of those codes.
//!
//! ## Resolution Order
//!
//! The hint is trimmed, uppercased, and whitespace/hyphens become `_`. Then:
//!
//! 1. An exact-alias table is consulted for full names whose letters would
//!    otherwise hit an earlier token (`ENGLAND` contains `NG`).
//! 2. A fixed, ordered list of substring tokens is scanned; the first token
//!    contained in the hint wins:
//!    `GH`/`GHANA`, `NG`/`NIGERIA`, `KE`/`KENYA`, `ZA`/`SOUTH_AFRICA`, `UK`, `US`.
//! 3. Anything else is [`JurisdictionCode::Global`].
//!
//! Resolution never fails and never produces a code outside the enum.

use serde::{Deserialize, Serialize};

/// A legal-regulatory region with its own currency, statutes and tariffs.
///
/// Serialized as the short region code (`"GH"`, `"UK"`, `"GLOBAL"`, …).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum JurisdictionCode {
    /// Republic of Ghana.
    #[serde(rename = "GH")]
    Ghana,
    /// Federal Republic of Nigeria.
    #[serde(rename = "NG")]
    Nigeria,
    /// Republic of Kenya.
    #[serde(rename = "KE")]
    Kenya,
    /// Republic of South Africa.
    #[serde(rename = "ZA")]
    SouthAfrica,
    /// United Kingdom.
    #[serde(rename = "UK")]
    UnitedKingdom,
    /// United States.
    #[serde(rename = "US")]
    UnitedStates,
    /// No specific jurisdiction: generic USD detection, no heuristics.
    #[default]
    #[serde(rename = "GLOBAL")]
    Global,
}

impl JurisdictionCode {
    /// Returns every jurisdiction code in registry order.
    pub fn all() -> &'static [JurisdictionCode] {
        &[
            Self::Ghana,
            Self::Nigeria,
            Self::Kenya,
            Self::SouthAfrica,
            Self::UnitedKingdom,
            Self::UnitedStates,
            Self::Global,
        ]
    }

    /// Returns the short region code. Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ghana => "GH",
            Self::Nigeria => "NG",
            Self::Kenya => "KE",
            Self::SouthAfrica => "ZA",
            Self::UnitedKingdom => "UK",
            Self::UnitedStates => "US",
            Self::Global => "GLOBAL",
        }
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country names whose letters collide with an earlier token ("ENGLAND" and
/// "KINGDOM" both contain "NG"). Matched anywhere in the hint, before the
/// token scan. Longest first.
const NAME_ALIASES: &[(&str, JurisdictionCode)] = &[
    ("UNITED_KINGDOM", JurisdictionCode::UnitedKingdom),
    ("GREAT_BRITAIN", JurisdictionCode::UnitedKingdom),
    ("UNITED_STATES", JurisdictionCode::UnitedStates),
    ("ENGLAND", JurisdictionCode::UnitedKingdom),
];

/// Short aliases only honoured when they are the whole hint.
const EXACT_ALIASES: &[(&str, JurisdictionCode)] = &[
    ("GB", JurisdictionCode::UnitedKingdom),
    ("USA", JurisdictionCode::UnitedStates),
];

/// Ordered substring tokens. Order is significant: the first hit wins.
const RESOLUTION_TOKENS: &[(&str, JurisdictionCode)] = &[
    ("GH", JurisdictionCode::Ghana),
    ("GHANA", JurisdictionCode::Ghana),
    ("NG", JurisdictionCode::Nigeria),
    ("NIGERIA", JurisdictionCode::Nigeria),
    ("KE", JurisdictionCode::Kenya),
    ("KENYA", JurisdictionCode::Kenya),
    ("ZA", JurisdictionCode::SouthAfrica),
    ("SOUTH_AFRICA", JurisdictionCode::SouthAfrica),
    ("UK", JurisdictionCode::UnitedKingdom),
    ("US", JurisdictionCode::UnitedStates),
];

fn normalize_hint(hint: &str) -> String {
    hint.trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '-' {
                '_'
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Resolve an arbitrary jurisdiction hint to a canonical code.
///
/// Empty and unrecognized hints resolve to [`JurisdictionCode::Global`].
pub fn resolve(hint: &str) -> JurisdictionCode {
    let normalized = normalize_hint(hint);
    if normalized.is_empty() {
        return JurisdictionCode::Global;
    }

    if let Some((_, code)) = EXACT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
    {
        return *code;
    }

    if let Some((_, code)) = NAME_ALIASES
        .iter()
        .find(|(alias, _)| normalized.contains(alias))
    {
        return *code;
    }

    RESOLUTION_TOKENS
        .iter()
        .find(|(token, _)| normalized.contains(token))
        .map(|(_, code)| *code)
        .unwrap_or(JurisdictionCode::Global)
}
