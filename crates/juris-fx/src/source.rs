//! The fallible rate source seam.
//!
//! [`FxRateSource`] is what [`crate::FxProvider`] wraps. The HTTP client is
//! the production implementation; [`OfflineSource`] serves the embedded
//! table without touching the network, and tests substitute their own.

use async_trait::async_trait;
use juris_core::SovereignPin;

use crate::error::FxError;
use crate::rates::FxRates;

/// A source of live exchange rates. Implementations may fail; callers that
/// must not fail wrap them in [`crate::FxProvider`].
#[async_trait]
pub trait FxRateSource: Send + Sync {
    /// Fetch the current rate snapshot, scoped by `pin` when given.
    async fn fetch_rates(&self, pin: Option<&SovereignPin>) -> Result<FxRates, FxError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// A source that always answers with the embedded fallback table.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl FxRateSource for OfflineSource {
    async fn fetch_rates(&self, _pin: Option<&SovereignPin>) -> Result<FxRates, FxError> {
        Ok(FxRates::fallback())
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
