use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing store.url for the rest backend")]
    MissingStoreUrl,
    #[error("Missing store.api_key for the rest backend")]
    MissingApiKey,
    #[error("Invalid store.table: name cannot be empty")]
    EmptyTable,
    #[error("Invalid store.timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    StoreTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::MissingStoreUrl => "Theme store URL is not configured!\n\n\
                Set store.url in config.toml or FOLIO__STORE__URL in the environment,\n\
                or switch to store.backend = \"memory\"."
                .to_string(),
            ConfigValidationError::MissingApiKey => "Theme store API key is not configured!\n\n\
                Set store.api_key in config.toml or FOLIO__STORE__API_KEY in the environment."
                .to_string(),
            ConfigValidationError::EmptyTable => {
                "Theme table name is empty!\n\nPlease update store.table in config.toml."
                    .to_string()
            }
            ConfigValidationError::StoreTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Theme store timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update store.timeout_secs in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
