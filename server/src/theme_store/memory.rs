use super::{StoreError, ThemeStore};
use crate::model::{NewThemeRow, ThemeColors, ThemeRow};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-local [`ThemeStore`] keeping rows in insertion order.
///
/// Identifiers are random UUIDs, mirroring what the hosted table assigns.
#[derive(Debug, Default)]
pub struct InMemoryThemeStore {
    rows: Mutex<Vec<ThemeRow>>,
}

impl InMemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing rows.
    pub fn with_rows(rows: Vec<ThemeRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    /// Snapshot of the current rows.
    pub async fn rows(&self) -> Vec<ThemeRow> {
        self.rows.lock().await.clone()
    }

    /// Rows currently carrying the active flag.
    pub async fn active_rows(&self) -> Vec<ThemeRow> {
        self.rows
            .lock()
            .await
            .iter()
            .filter(|row| row.is_active)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ThemeStore for InMemoryThemeStore {
    async fn read_active_theme(&self) -> Result<Option<ThemeRow>, StoreError> {
        let rows = self.rows.lock().await;
        let mut active = rows.iter().filter(|row| row.is_active);
        let first = active.next().cloned();
        if active.next().is_some() {
            // Same behavior as a single-object request against the hosted table
            return Err(StoreError::Api {
                status: 406,
                code: "PGRST116".to_string(),
                message: "multiple active theme rows".to_string(),
            });
        }
        Ok(first)
    }

    async fn clear_all_active(&self) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        for row in rows.iter_mut() {
            row.is_active = false;
        }
        Ok(())
    }

    async fn find_theme_by_name(&self, name: &str) -> Result<Option<ThemeRow>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|row| row.name == name).cloned())
    }

    async fn update_theme(
        &self,
        id: &str,
        colors: &ThemeColors,
        active: bool,
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        // Updating a missing id matches zero rows, which is not an error
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            row.colors = colors.clone();
            row.is_active = active;
        } else {
            log::debug!("update_theme matched no row for id {id}");
        }
        Ok(())
    }

    async fn insert_theme(&self, row: NewThemeRow) -> Result<ThemeRow, StoreError> {
        let stored = ThemeRow {
            id: uuid::Uuid::new_v4().to_string(),
            name: row.name,
            colors: row.colors,
            is_active: row.is_active,
            created_at: Some(chrono::Utc::now()),
        };
        self.rows.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_themes(&self) -> Result<Vec<ThemeRow>, StoreError> {
        Ok(self.rows().await)
    }
}
