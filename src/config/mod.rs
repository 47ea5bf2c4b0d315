//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `POSTOP_INTAKE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use postop_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Classifier at {}", config.service.base_url);
//! ```

mod error;
mod service;
mod storage;
mod submission;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use service::ServiceConfig;
pub use storage::StorageConfig;
pub use submission::SubmissionConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote classification service (base URL, timeout)
    #[serde(default)]
    pub service: ServiceConfig,

    /// Draft storage location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Submission pacing and audit bounds
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `POSTOP_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `POSTOP_INTAKE__SERVICE__BASE_URL=http://api:8000` -> `service.base_url`
    /// - `POSTOP_INTAKE__SUBMISSION__MIN_DISPLAY_MS=0` -> `submission.min_display_ms`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("POSTOP_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.service.validate()?;
        self.storage.validate()?;
        self.submission.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("POSTOP_INTAKE__SERVICE__BASE_URL");
        env::remove_var("POSTOP_INTAKE__SERVICE__TIMEOUT_SECS");
        env::remove_var("POSTOP_INTAKE__STORAGE__DRAFT_DIR");
        env::remove_var("POSTOP_INTAKE__SUBMISSION__MIN_DISPLAY_MS");
        env::remove_var("POSTOP_INTAKE__TELEMETRY__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.submission.progress_tick_ms, 150);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("POSTOP_INTAKE__SERVICE__BASE_URL", "https://classifier.example.com");
        env::set_var("POSTOP_INTAKE__SERVICE__TIMEOUT_SECS", "30");
        env::set_var("POSTOP_INTAKE__STORAGE__DRAFT_DIR", "/tmp/drafts");
        env::set_var("POSTOP_INTAKE__SUBMISSION__MIN_DISPLAY_MS", "0");
        env::set_var("POSTOP_INTAKE__TELEMETRY__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.service.base_url, "https://classifier.example.com");
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.storage.draft_dir, std::path::PathBuf::from("/tmp/drafts"));
        assert_eq!(config.submission.min_display_ms, 0);
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = AppConfig {
            service: ServiceConfig {
                base_url: "localhost:8000".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidServiceUrl));
    }
}
