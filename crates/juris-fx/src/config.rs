//! FX rate service configuration.
//!
//! The service URL is optional: without one the provider runs offline and
//! serves the embedded fallback table.

use url::Url;

/// Default request timeout for the FX rate service.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the FX rate service.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone, PartialEq, Eq)]
pub struct FxConfig {
    /// Base URL of the FX rate service. `None` means offline mode.
    pub base_url: Option<Url>,
    /// Optional bearer token for the service.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for FxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FxConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for FxConfig {
    fn default() -> Self {
        Self::offline()
    }
}

impl FxConfig {
    /// Configuration for a live service at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configuration with no live service.
    pub fn offline() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the bearer token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Whether a live service is configured.
    pub fn is_offline(&self) -> bool {
        self.base_url.is_none()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `JURIS_FX_URL` (optional; absent means offline fallback mode)
    /// - `JURIS_FX_TOKEN` (optional bearer token)
    /// - `JURIS_FX_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = match non_empty(lookup("JURIS_FX_URL")) {
            Some(raw) => Some(parse_url("JURIS_FX_URL", &raw)?),
            None => None,
        };
        let timeout_secs = match non_empty(lookup("JURIS_FX_TIMEOUT_SECS")) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            base_url,
            api_token: non_empty(lookup("JURIS_FX_TOKEN")),
            timeout_secs,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl(
            var.to_string(),
            format!("unsupported scheme {other:?}"),
        )),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("JURIS_FX_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
    #[error("JURIS_FX_TOKEN contains characters not allowed in an HTTP header")]
    InvalidToken,
}
