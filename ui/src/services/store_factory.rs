use crate::config::{StoreBackend, StoreConfig};
use crate::error::AppResult;
use server::theme_store::{InMemoryThemeStore, RestThemeStore, ThemeStore};
use std::sync::Arc;

/// Construct the theme store selected by `[store] backend`.
pub fn build_theme_store(config: &StoreConfig) -> AppResult<Arc<dyn ThemeStore>> {
    match config.backend() {
        StoreBackend::Rest => {
            let store = RestThemeStore::new(config.rest_config())?;
            log::info!("Using hosted theme store at {}", store.endpoint());
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            log::info!("Using in-memory theme store; selections are not kept across runs");
            Ok(Arc::new(InMemoryThemeStore::new()))
        }
    }
}
