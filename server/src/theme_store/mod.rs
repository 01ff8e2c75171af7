//! Persistence contract for theme records and its implementations.
//!
//! - [`ThemeStore`] - async read/write contract consumed by the theme context
//! - [`RestThemeStore`] - adapter for the hosted database's PostgREST API
//! - [`InMemoryThemeStore`] - process-local store for tests and offline use

pub mod errors;
pub mod memory;
pub mod rest;

pub use errors::StoreError;
pub use memory::InMemoryThemeStore;
pub use rest::{RestStoreConfig, RestThemeStore};

use crate::model::{NewThemeRow, ThemeColors, ThemeRow};
use async_trait::async_trait;

/// Row-oriented store holding zero or more theme records.
///
/// At most one record is meant to carry the active flag. The store itself
/// does not enforce that; callers clear the flag before setting a new one.
///
/// # Examples
///
/// ```no_run
/// use server::theme_store::{InMemoryThemeStore, ThemeStore};
///
/// # async fn demo() -> Result<(), server::theme_store::StoreError> {
/// let store = InMemoryThemeStore::new();
/// match store.read_active_theme().await? {
///     Some(row) => println!("active theme: {}", row.name),
///     None => println!("no theme persisted yet"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// Read the single record flagged active.
    ///
    /// Returns `Ok(None)` when no record is flagged, which is distinct from
    /// a failed read.
    async fn read_active_theme(&self) -> Result<Option<ThemeRow>, StoreError>;

    /// Clear the active flag on every record.
    async fn clear_all_active(&self) -> Result<(), StoreError>;

    /// Look a record up by its display name.
    async fn find_theme_by_name(&self, name: &str) -> Result<Option<ThemeRow>, StoreError>;

    /// Overwrite the palette and active flag of an existing record.
    async fn update_theme(
        &self,
        id: &str,
        colors: &ThemeColors,
        active: bool,
    ) -> Result<(), StoreError>;

    /// Insert a new record. The store assigns its identifier.
    async fn insert_theme(&self, row: NewThemeRow) -> Result<ThemeRow, StoreError>;

    /// Every record, oldest first.
    async fn list_themes(&self) -> Result<Vec<ThemeRow>, StoreError>;
}
