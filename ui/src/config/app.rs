use super::{
    LoggingConfig,
    limits::{MAX_STORE_TIMEOUT_SECS, MIN_STORE_TIMEOUT_SECS},
    store::{StoreBackend, StoreConfig},
    validation::ConfigValidationError,
};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    store: StoreConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if self.store.backend() == StoreBackend::Rest {
            if self.store.url().is_none() {
                errors.push(ConfigValidationError::MissingStoreUrl);
            }
            if self.store.api_key().is_none() {
                errors.push(ConfigValidationError::MissingApiKey);
            }
            if self.store.table().trim().is_empty() {
                errors.push(ConfigValidationError::EmptyTable);
            }
        }

        let timeout = self.store.timeout_secs();
        if !(MIN_STORE_TIMEOUT_SECS..=MAX_STORE_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::StoreTimeout {
                configured: timeout,
                min_limit: MIN_STORE_TIMEOUT_SECS,
                max_limit: MAX_STORE_TIMEOUT_SECS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
