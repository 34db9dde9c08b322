//! # Non-Failing FX Provider
//!
//! [`FxProvider`] wraps any [`FxRateSource`] and guarantees an answer:
//!
//! - A successful fetch is returned with any missing pairs filled in from
//!   the fallback table.
//! - Any [`crate::FxError`] (transport, timeout, non-2xx, decode) is logged
//!   at `warn` and replaced by the full fallback table.
//!
//! The provider adds no timeout, retry or request coalescing of its own.
//! Concurrent callers fetch independently.

use std::sync::Arc;

use juris_core::SovereignPin;

use crate::client::HttpFxClient;
use crate::config::FxConfig;
use crate::error::FxError;
use crate::rates::FxRates;
use crate::source::{FxRateSource, OfflineSource};

/// Rate provider that never fails.
#[derive(Clone)]
pub struct FxProvider {
    source: Arc<dyn FxRateSource>,
    fallback: FxRates,
}

impl std::fmt::Debug for FxProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FxProvider")
            .field("source", &self.source.name())
            .field("fallback_pairs", &self.fallback.len())
            .finish()
    }
}

impl FxProvider {
    /// Wrap an arbitrary rate source.
    pub fn new(source: Arc<dyn FxRateSource>) -> Self {
        Self {
            source,
            fallback: FxRates::fallback(),
        }
    }

    /// A provider that always serves the embedded fallback table.
    pub fn offline() -> Self {
        Self::new(Arc::new(OfflineSource))
    }

    /// Build from configuration: the HTTP client when a service URL is
    /// configured, offline otherwise.
    ///
    /// # Errors
    ///
    /// Fails only on invalid configuration (bad token characters, client
    /// construction failure). Network problems surface later, as fallback.
    pub fn from_config(config: &FxConfig) -> Result<Self, FxError> {
        match HttpFxClient::from_config(config)? {
            Some(client) => {
                tracing::info!(url = %client.rates_url(), "FX provider using live rate service");
                Ok(Self::new(Arc::new(client)))
            }
            None => {
                tracing::info!("FX provider running offline on embedded fallback rates");
                Ok(Self::offline())
            }
        }
    }

    /// Name of the wrapped source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Current rates. Never fails.
    pub async fn rates(&self, pin: Option<&SovereignPin>) -> FxRates {
        match self.source.fetch_rates(pin).await {
            Ok(mut live) => {
                let filled = live.fill_missing_from(&self.fallback);
                if filled > 0 {
                    tracing::debug!(filled, "filled missing FX pairs from fallback table");
                }
                live
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    error = %e,
                    "FX rate fetch failed; using embedded fallback rates"
                );
                self.fallback.clone()
            }
        }
    }
}
