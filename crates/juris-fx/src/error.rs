//! FX rate service error types.
//!
//! None of these reach an audit caller: [`crate::FxProvider`] turns every
//! one of them into the fallback table. They exist so the failure is logged
//! with the endpoint and cause.

/// Errors from FX rate service calls.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The request did not complete within the configured timeout.
    #[error("FX rate service {endpoint} timed out after {timeout_secs}s")]
    Timeout { endpoint: String, timeout_secs: u64 },
    /// FX rate service returned a non-2xx status.
    #[error("FX rate service {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn timeout_display_names_endpoint_and_limit() {
        let err = FxError::Timeout {
            endpoint: "GET /v1/fx/rates".into(),
            timeout_secs: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("GET /v1/fx/rates"));
        assert!(msg.contains("10s"));
    }

    #[test]
    fn config_error_converts() {
        let err: FxError = ConfigError::InvalidToken.into();
        assert!(err.to_string().starts_with("configuration error"));
    }
}
