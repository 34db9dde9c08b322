//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. The audit engine is immutable and shared
//! behind an `Arc`; nothing here is mutated after startup.

use std::sync::Arc;

use juris_audit::AuditEngine;
use juris_fx::{ConfigError, FxConfig, FxError, FxProvider};
use juris_pack::JurisdictionRegistry;

/// Log output format for the API binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// FX rate service configuration.
    pub fx: FxConfig,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            fx: FxConfig::offline(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORT` (default: 8080)
    /// - `JURIS_LOG_FORMAT` (`json` for JSON logs, anything else for text)
    /// - the `JURIS_FX_*` variables read by [`FxConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let log_format = match std::env::var("JURIS_LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Ok(Self {
            port,
            fx: FxConfig::from_env()?,
            log_format,
        })
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<AuditEngine>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with default configuration and offline FX rates.
    pub fn new() -> Self {
        Self::with_engine(AppConfig::default(), AuditEngine::offline())
    }

    /// Build state from configuration, connecting the FX provider.
    pub fn with_config(config: AppConfig) -> Result<Self, FxError> {
        let fx = FxProvider::from_config(&config.fx)?;
        let engine = AuditEngine::new(Arc::new(JurisdictionRegistry::new()), fx);
        Ok(Self::with_engine(config, engine))
    }

    /// Build state around an existing engine.
    pub fn with_engine(config: AppConfig, engine: AuditEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_offline_on_8080() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert!(config.fx.is_offline());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn new_state_uses_offline_provider() {
        let state = AppState::new();
        assert_eq!(state.engine.fx().source_name(), "offline");
    }

    #[test]
    fn with_config_offline() {
        let state = AppState::with_config(AppConfig::default()).unwrap();
        assert_eq!(state.engine.fx().source_name(), "offline");
        assert_eq!(state.config.port, 8080);
    }
}
