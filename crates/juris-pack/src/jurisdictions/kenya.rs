//! # Republic of Kenya
//!
//! Kenyan duty is low on charges and high on land transfers; the Land
//! Control Act consent rule is included because it voids unconsented
//! agricultural land dealings outright.

use juris_core::{CurrencyCode, InstrumentType, JurisdictionCode};
use rust_decimal_macros::dec;

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, KES, USD};
use crate::duty::{TariffEntry, TariffTable};
use crate::heuristic::HeuristicSpec;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD, KES];

const HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        id: "ke-stamp-duty",
        issue: "Stamp duty is referenced without specifying KES denomination or the Kenya Revenue Authority.",
        statute: "Stamp Duty Act, Cap. 480",
        fix: "State that stamp duty is payable in Kenya Shillings (KES) and assessed by the Kenya Revenue Authority (KRA).",
        trigger: r"stamp\s+duty",
        negative_pattern: Some(r"\b(KES|KRA)\b"),
    },
    HeuristicSpec {
        id: "ke-governing-law",
        issue: "Governing law clause does not designate the laws of Kenya.",
        statute: "Judicature Act, Cap. 8, Section 3",
        fix: "Insert: \"This Agreement shall be governed by the laws of the Republic of Kenya.\"",
        trigger: r"governing\s+law|governed\s+by",
        negative_pattern: Some(r"laws?\s+of\s+(the\s+republic\s+of\s+)?kenya"),
    },
    HeuristicSpec {
        id: "ke-data-protection",
        issue: "Personal data processing is contemplated without reference to the Data Protection Act.",
        statute: "Data Protection Act, 2019 (No. 24 of 2019)",
        fix: "Add an undertaking to process personal data in accordance with the Data Protection Act, 2019.",
        trigger: r"personal\s+(data|information)",
        negative_pattern: Some(r"data\s+protection\s+act"),
    },
    HeuristicSpec {
        id: "ke-land-consent",
        issue: "Dealing in agricultural land without a Land Control Board consent condition.",
        statute: "Land Control Act, Cap. 302, Section 6",
        fix: "Make completion conditional on consent of the relevant Land Control Board.",
        trigger: r"agricultural\s+land",
        negative_pattern: Some(r"land\s+control\s+board|land\s+control\s+act"),
    },
];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::Kenya,
        display_name: "Kenya",
        currency: CurrencyCode::Kes,
        foreign_reference: Some(CurrencyCode::Usd),
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: HEURISTICS,
        tariff: TariffTable {
            authority: "Kenya Revenue Authority (KRA)",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.01),
                    filing_category: "Lease",
                },
                TariffEntry {
                    instrument: InstrumentType::MortgageCharge,
                    rate: dec!(0.001),
                    filing_category: "Charge/Mortgage",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.04),
                    filing_category: "Transfer of Land (Municipality)",
                },
            ],
            default_rate: dec!(0.01),
            default_category: "General Instrument",
        },
        description: "Kenyan contract and land law with KRA stamp duty assessment under Cap. 480.",
    }
}
