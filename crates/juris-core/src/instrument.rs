//! # Instrument Types
//!
//! The legal category of the audited document. It selects the statutory
//! duty rate from a jurisdiction's tariff table.
//!
//! Selectors arrive as free strings from the host UI ("Commercial",
//! "Lease", "Mortgage/Charge", "conveyance", …). [`InstrumentType::from_selector`]
//! is total: anything it does not recognise becomes
//! [`InstrumentType::General`], which the duty calculator prices at the
//! jurisdiction's default rate.

use serde::{Deserialize, Serialize};

/// Closed set of instrument categories that carry distinct duty rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentType {
    /// Commercial agreements and leases.
    CommercialLease,
    /// Mortgages, charges and other security instruments.
    MortgageCharge,
    /// Conveyances and transfers of property.
    ConveyanceTransfer,
    /// Anything else; priced at the general rate.
    #[default]
    General,
}

impl InstrumentType {
    /// Returns all instrument types.
    pub fn all() -> &'static [InstrumentType] {
        &[
            Self::CommercialLease,
            Self::MortgageCharge,
            Self::ConveyanceTransfer,
            Self::General,
        ]
    }

    /// Returns the snake_case identifier. Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommercialLease => "commercial_lease",
            Self::MortgageCharge => "mortgage_charge",
            Self::ConveyanceTransfer => "conveyance_transfer",
            Self::General => "general",
        }
    }

    /// Human-readable label as shown in filing categories.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CommercialLease => "Commercial/Lease",
            Self::MortgageCharge => "Mortgage/Charge",
            Self::ConveyanceTransfer => "Conveyance/Transfer",
            Self::General => "General",
        }
    }

    /// Parse a UI selector leniently. Unknown selectors map to `General`.
    pub fn from_selector(selector: &str) -> Self {
        let normalized = selector.trim().to_ascii_lowercase();
        let first_word = normalized
            .split(|c: char| c == '/' || c == '_' || c == '-' || c.is_whitespace())
            .find(|part| !part.is_empty())
            .unwrap_or("");
        match first_word {
            "commercial" | "lease" | "tenancy" => Self::CommercialLease,
            "mortgage" | "charge" | "debenture" => Self::MortgageCharge,
            "conveyance" | "transfer" | "assignment" => Self::ConveyanceTransfer,
            _ => Self::General,
        }
    }
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// -- Lenient Deserialize for InstrumentType -----------------------------------

impl<'de> Deserialize<'de> for InstrumentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_selector(&raw))
    }
}
