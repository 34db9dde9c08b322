//! # Jurisdiction Registry
//!
//! Compiles every jurisdiction once and hands out shared references. The
//! registry is immutable after construction and is shared between audits
//! behind an `Arc`.

use juris_core::{resolve, JurisdictionCode};

use crate::config::{get_config, JurisdictionConfig, JurisdictionSummary};

/// All compiled jurisdiction configurations, indexed by code.
#[derive(Debug, Clone)]
pub struct JurisdictionRegistry {
    configs: Vec<JurisdictionConfig>,
}

fn slot(code: JurisdictionCode) -> usize {
    match code {
        JurisdictionCode::Ghana => 0,
        JurisdictionCode::Nigeria => 1,
        JurisdictionCode::Kenya => 2,
        JurisdictionCode::SouthAfrica => 3,
        JurisdictionCode::UnitedKingdom => 4,
        JurisdictionCode::UnitedStates => 5,
        JurisdictionCode::Global => 6,
    }
}

impl JurisdictionRegistry {
    /// Compile every registered jurisdiction.
    pub fn new() -> Self {
        let mut configs: Vec<JurisdictionConfig> =
            JurisdictionCode::all().iter().map(|c| get_config(*c)).collect();
        configs.sort_by_key(|c| slot(c.code()));
        tracing::debug!(count = configs.len(), "jurisdiction registry compiled");
        Self { configs }
    }

    /// Configuration for `code`.
    pub fn get(&self, code: JurisdictionCode) -> &JurisdictionConfig {
        &self.configs[slot(code)]
    }

    /// Resolve a free-form hint and return its configuration.
    pub fn resolve(&self, hint: &str) -> &JurisdictionConfig {
        self.get(resolve(hint))
    }

    /// All configurations in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionConfig> {
        self.configs.iter()
    }

    /// Listing of all registered jurisdictions.
    pub fn summaries(&self) -> Vec<JurisdictionSummary> {
        self.iter().map(JurisdictionConfig::summary).collect()
    }
}

impl Default for JurisdictionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
