//! # Sovereign Pin
//!
//! The opaque tenant/region identifier the host application passes along so
//! the FX rate service can scope its lookups. The engine never interprets
//! it; it only guarantees the value can travel as an HTTP header.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for SovereignPin ----------------------------------

impl<'de> Deserialize<'de> for SovereignPin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Opaque tenant/region identifier for scoped FX rate lookups.
///
/// # Validation
///
/// Must be non-empty after trimming, at most 128 characters, and consist of
/// visible ASCII only (it is sent verbatim as a header value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SovereignPin(String);

impl SovereignPin {
    /// Maximum accepted pin length.
    pub const MAX_LEN: usize = 128;

    /// Create a pin, validating header safety.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPin`] when the value is empty, too
    /// long, or contains non-printable / non-ASCII characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidPin("must be non-empty".to_string()));
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(ValidationError::InvalidPin(format!(
                "must not exceed {} characters",
                Self::MAX_LEN
            )));
        }
        if !trimmed.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ValidationError::InvalidPin(
                "must contain visible ASCII characters only".to_string(),
            ));
        }
        Ok(Self(trimmed))
    }

    /// Access the pin string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SovereignPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_valid_and_trimmed() {
        let pin = SovereignPin::new("  gh-tenant-42 ").unwrap();
        assert_eq!(pin.as_str(), "gh-tenant-42");
        assert_eq!(format!("{pin}"), "gh-tenant-42");
    }

    #[test]
    fn pin_rejects_empty() {
        assert!(SovereignPin::new("").is_err());
        assert!(SovereignPin::new("   ").is_err());
    }

    #[test]
    fn pin_rejects_header_unsafe_characters() {
        assert!(SovereignPin::new("tenant one").is_err());
        assert!(SovereignPin::new("tenant\nX-Injected: 1").is_err());
        assert!(SovereignPin::new("ténant").is_err());
    }

    #[test]
    fn pin_rejects_overlong_values() {
        let long = "a".repeat(SovereignPin::MAX_LEN + 1);
        assert!(SovereignPin::new(long).is_err());
    }

    #[test]
    fn pin_serde_validates_on_deserialize() {
        let pin: SovereignPin = serde_json::from_str("\"ke-01\"").unwrap();
        assert_eq!(pin.as_str(), "ke-01");
        assert!(serde_json::from_str::<SovereignPin>("\"\"").is_err());
    }
}
