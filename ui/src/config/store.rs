use super::limits::{DEFAULT_STORE_TIMEOUT_SECS, DEFAULT_THEME_TABLE};
use serde::Deserialize;
use server::theme_store::RestStoreConfig;

/// Which theme store implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Hosted database over PostgREST
    #[default]
    Rest,
    /// Process-local rows, lost on exit
    Memory,
}

/// Theme store configuration (`[store]` section)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    backend: Option<StoreBackend>,
    url: Option<String>,
    api_key: Option<String>,
    table: Option<String>,
    timeout_secs: Option<u64>,
}

impl StoreConfig {
    pub fn backend(&self) -> StoreBackend {
        self.backend.unwrap_or_default()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    pub fn table(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_THEME_TABLE)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_STORE_TIMEOUT_SECS)
    }

    /// Connection settings for the REST adapter. Missing values stay empty;
    /// `AppConfig::validate` reports them before this is used.
    pub fn rest_config(&self) -> RestStoreConfig {
        RestStoreConfig {
            url: self.url().unwrap_or_default().to_string(),
            api_key: self.api_key().unwrap_or_default().to_string(),
            table: self.table().to_string(),
            timeout_secs: self.timeout_secs(),
        }
    }
}
