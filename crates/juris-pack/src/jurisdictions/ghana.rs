//! # Republic of Ghana
//!
//! Local currency GHS; USD contract values are converted at the USD/GHS
//! rate. Duty is administered by the Ghana Revenue Authority under the
//! Stamp Duty Act, 2005 (Act 689).

use juris_core::{CurrencyCode, InstrumentType, JurisdictionCode};
use rust_decimal_macros::dec;

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, GHS, USD};
use crate::duty::{TariffEntry, TariffTable};
use crate::heuristic::HeuristicSpec;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD, GHS];

const HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        id: "gh-stamp-duty",
        issue: "Stamp duty is referenced without specifying GHS denomination or the Ghana Revenue Authority as assessing body.",
        statute: "Stamp Duty Act, 2005 (Act 689)",
        fix: "State that stamp duty is payable in Ghana Cedis (GHS) and assessed by the Ghana Revenue Authority (GRA).",
        trigger: r"stamp\s+duty",
        negative_pattern: Some(r"\b(GHS|GRA)\b"),
    },
    HeuristicSpec {
        id: "gh-governing-law",
        issue: "Governing law clause does not designate the laws of Ghana.",
        statute: "1992 Constitution of Ghana, Article 11 (Laws of Ghana)",
        fix: "Insert: \"This Agreement shall be governed by and construed in accordance with the laws of the Republic of Ghana.\"",
        trigger: r"governing\s+law|governed\s+by",
        negative_pattern: Some(r"laws?\s+of\s+(the\s+republic\s+of\s+)?ghana"),
    },
    HeuristicSpec {
        id: "gh-arbitration",
        issue: "Arbitration clause does not reference the Alternative Dispute Resolution Act.",
        statute: "Alternative Dispute Resolution Act, 2010 (Act 798)",
        fix: "Provide that arbitration shall be conducted under the Alternative Dispute Resolution Act, 2010 (Act 798).",
        trigger: r"\barbitrat",
        negative_pattern: Some(r"alternative\s+dispute\s+resolution\s+act|act\s+798"),
    },
    HeuristicSpec {
        id: "gh-foreign-currency",
        issue: "Payment obligations are denominated in foreign currency without reference to Bank of Ghana foreign exchange rules.",
        statute: "Foreign Exchange Act, 2006 (Act 723)",
        fix: "Add a clause making foreign currency payments subject to the Foreign Exchange Act, 2006 (Act 723) and Bank of Ghana directives.",
        trigger: r"US\$|\bUSD\b|dollars?",
        negative_pattern: Some(r"bank\s+of\s+ghana|\bBoG\b|act\s+723"),
    },
    HeuristicSpec {
        id: "gh-data-protection",
        issue: "Personal data processing is contemplated without a Data Protection Act compliance undertaking.",
        statute: "Data Protection Act, 2012 (Act 843)",
        fix: "Add an undertaking that personal data will be processed in accordance with the Data Protection Act, 2012 (Act 843).",
        trigger: r"personal\s+(data|information)",
        negative_pattern: Some(r"data\s+protection\s+act|act\s+843"),
    },
];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::Ghana,
        display_name: "Ghana",
        currency: CurrencyCode::Ghs,
        foreign_reference: Some(CurrencyCode::Usd),
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: HEURISTICS,
        tariff: TariffTable {
            authority: "Ghana Revenue Authority (GRA)",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.005),
                    filing_category: "Commercial/Lease Agreement",
                },
                TariffEntry {
                    instrument: InstrumentType::MortgageCharge,
                    rate: dec!(0.0025),
                    filing_category: "Mortgage/Charge",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.01),
                    filing_category: "Conveyance/Transfer of Property",
                },
            ],
            default_rate: dec!(0.005),
            default_category: "General Instrument",
        },
        description: "Ghanaian contract law with GRA stamp duty assessment under Act 689.",
    }
}
