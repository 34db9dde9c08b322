//! # Republic of South Africa
//!
//! South Africa abolished stamp duty on leases and charges; property
//! transfers attract transfer duty instead, which is what the conveyance
//! row carries.

use juris_core::{CurrencyCode, InstrumentType, JurisdictionCode};
use rust_decimal_macros::dec;

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, USD, ZAR};
use crate::duty::{TariffEntry, TariffTable};
use crate::heuristic::HeuristicSpec;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD, ZAR];

const HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        id: "za-governing-law",
        issue: "Governing law clause does not designate the laws of the Republic of South Africa.",
        statute: "Constitution of the Republic of South Africa, 1996, Section 39",
        fix: "Insert: \"This Agreement shall be governed by the laws of the Republic of South Africa.\"",
        trigger: r"governing\s+law|governed\s+by",
        negative_pattern: Some(r"laws?\s+of\s+(the\s+republic\s+of\s+)?south\s+africa"),
    },
    HeuristicSpec {
        id: "za-popia",
        issue: "Personal information processing is contemplated without a POPIA compliance undertaking.",
        statute: "Protection of Personal Information Act 4 of 2013 (POPIA)",
        fix: "Add an undertaking that personal information will be processed in accordance with POPIA.",
        trigger: r"personal\s+(data|information)",
        negative_pattern: Some(r"\bPOPIA\b|protection\s+of\s+personal\s+information\s+act"),
    },
    HeuristicSpec {
        id: "za-cpa",
        issue: "Consumer-facing terms do not acknowledge the Consumer Protection Act.",
        statute: "Consumer Protection Act 68 of 2008",
        fix: "Acknowledge the rights of the consumer under the Consumer Protection Act 68 of 2008.",
        trigger: r"\bconsumers?\b",
        negative_pattern: Some(r"consumer\s+protection\s+act"),
    },
    HeuristicSpec {
        id: "za-transfer-duty",
        issue: "Transfer of immovable property without allocation of transfer duty liability.",
        statute: "Transfer Duty Act 40 of 1949",
        fix: "Specify which party bears transfer duty payable to SARS under the Transfer Duty Act 40 of 1949.",
        trigger: r"immovable\s+property|transfer\s+of\s+(the\s+)?property",
        negative_pattern: Some(r"transfer\s+duty"),
    },
];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::SouthAfrica,
        display_name: "South Africa",
        currency: CurrencyCode::Zar,
        foreign_reference: Some(CurrencyCode::Usd),
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: HEURISTICS,
        tariff: TariffTable {
            authority: "South African Revenue Service (SARS)",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.0),
                    filing_category: "Lease (Stamp Duty Abolished)",
                },
                TariffEntry {
                    instrument: InstrumentType::MortgageCharge,
                    rate: dec!(0.0),
                    filing_category: "Mortgage Bond (Stamp Duty Abolished)",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.03),
                    filing_category: "Transfer Duty",
                },
            ],
            default_rate: dec!(0.0025),
            default_category: "General Instrument",
        },
        description: "South African contract law with SARS transfer duty on immovable property.",
    }
}
