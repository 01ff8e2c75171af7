use super::catalog;
use super::style::StyleSurface;
use super::types::Theme;
use crate::error::{AppError, AppResult};
use server::model::NewThemeRow;
use server::theme_store::ThemeStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// How [`ThemeContext::initialize`] resolved the current theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The active record from the store was applied
    Restored,
    /// No record was active; the first catalog entry was applied
    Fallback,
    /// The store read failed; no theme is current
    Failed,
    /// `initialize` already ran for this context
    AlreadyInitialized,
}

/// Store step of a selection that did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStep {
    ClearActive,
    Lookup,
    Update,
    Insert,
}

/// What a [`ThemeContext::set_theme`] call did to the store.
///
/// Local state and styling are switched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeChange {
    /// No record had this name; one was created active
    Inserted { id: String },
    /// The existing record was updated and flagged active
    Updated { id: String },
    /// A store step failed; the store may disagree with local state
    PersistFailed { step: PersistStep },
}

/// Process-wide theme state synchronized with a [`ThemeStore`].
///
/// Construct one at start-up and share it by `Arc` with every consumer.
/// `initialize` and `set_theme` log store failures instead of returning
/// them; styling is applied through the [`StyleSurface`] after every
/// successful change.
///
/// Store writes within one `set_theme` call are sequential, but no lock is
/// held across them: two concurrent selections can interleave and leave the
/// store with a different active record than local state.
pub struct ThemeContext {
    store: Arc<dyn ThemeStore>,
    surface: Arc<dyn StyleSurface>,
    themes: Vec<Theme>,
    current_theme: RwLock<Option<Theme>>,
    initialized: AtomicBool,
}

impl ThemeContext {
    /// Context over the built-in catalog.
    pub fn new(store: Arc<dyn ThemeStore>, surface: Arc<dyn StyleSurface>) -> Self {
        Self::build(store, surface, catalog::themes().to_vec())
    }

    /// Context over a custom catalog. The first entry is the fallback theme,
    /// so the catalog cannot be empty.
    pub fn with_catalog(
        store: Arc<dyn ThemeStore>,
        surface: Arc<dyn StyleSurface>,
        themes: Vec<Theme>,
    ) -> AppResult<Self> {
        if themes.is_empty() {
            return Err(AppError::Config(
                "Theme catalog must contain at least one theme".to_string(),
            ));
        }
        Ok(Self::build(store, surface, themes))
    }

    fn build(
        store: Arc<dyn ThemeStore>,
        surface: Arc<dyn StyleSurface>,
        themes: Vec<Theme>,
    ) -> Self {
        Self {
            store,
            surface,
            themes,
            current_theme: RwLock::new(None),
            initialized: AtomicBool::new(false),
        }
    }

    /// Resolve the current theme from the store, once per context.
    pub async fn initialize(&self) -> InitOutcome {
        if self.initialized.swap(true, Ordering::SeqCst) {
            log::debug!("Theme context already initialized");
            return InitOutcome::AlreadyInitialized;
        }

        let (theme, outcome) = match self.store.read_active_theme().await {
            Ok(Some(row)) => {
                log::info!("Restored active theme: {}", row.name);
                (Theme::from(row), InitOutcome::Restored)
            }
            Ok(None) => {
                let fallback = self.themes[0].clone();
                log::info!(
                    "No active theme persisted, falling back to {}",
                    fallback.name
                );
                (fallback, InitOutcome::Fallback)
            }
            Err(e) => {
                log::error!("Failed to fetch active theme: {e}");
                return InitOutcome::Failed;
            }
        };

        self.replace_current(theme).await;
        outcome
    }

    /// Make `theme` current, persist it as the only active record and apply it.
    pub async fn set_theme(&self, theme: Theme) -> ThemeChange {
        log::info!("Switching to theme: {}", theme.name);

        let change = self.persist_selection(&theme).await;
        match &change {
            ThemeChange::PersistFailed { step } => {
                log::warn!("Theme {} applied locally but not persisted ({step:?})", theme.name)
            }
            ThemeChange::Inserted { id } | ThemeChange::Updated { id } => {
                log::debug!("Theme {} persisted as {id}", theme.name)
            }
        }

        self.replace_current(theme).await;
        change
    }

    /// The write guard is held while styling so the surface and the current
    /// theme always change together.
    async fn replace_current(&self, theme: Theme) {
        let mut current = self.current_theme.write().await;
        self.apply_theme(&theme);
        *current = Some(theme);
    }

    async fn persist_selection(&self, theme: &Theme) -> ThemeChange {
        let mut first_failure = None;

        if let Err(e) = self.store.clear_all_active().await {
            log::error!("Failed to clear active theme flags: {e}");
            first_failure = Some(PersistStep::ClearActive);
        }

        let written = match self.store.find_theme_by_name(&theme.name).await {
            Ok(Some(existing)) => {
                match self
                    .store
                    .update_theme(&existing.id, &theme.colors, true)
                    .await
                {
                    Ok(()) => Ok(ThemeChange::Updated { id: existing.id }),
                    Err(e) => {
                        log::error!("Failed to update theme {}: {e}", theme.name);
                        Err(PersistStep::Update)
                    }
                }
            }
            Ok(None) => {
                let row = NewThemeRow {
                    name: theme.name.clone(),
                    colors: theme.colors.clone(),
                    is_active: true,
                };
                match self.store.insert_theme(row).await {
                    Ok(stored) => Ok(ThemeChange::Inserted { id: stored.id }),
                    Err(e) => {
                        log::error!("Failed to insert theme {}: {e}", theme.name);
                        Err(PersistStep::Insert)
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to look up theme {}: {e}", theme.name);
                Err(PersistStep::Lookup)
            }
        };

        match (first_failure, written) {
            (Some(step), _) | (None, Err(step)) => ThemeChange::PersistFailed { step },
            (None, Ok(change)) => change,
        }
    }

    /// Write every atomic color of `theme` onto the style surface.
    ///
    /// The gradient is never written; views read it from the theme value.
    pub fn apply_theme(&self, theme: &Theme) {
        for (role, value) in theme.colors.atomic() {
            self.surface.set_variable(role.as_str(), value);
        }
        log::debug!("Applied theme {} to style surface", theme.name);
    }

    pub async fn current_theme(&self) -> Option<Theme> {
        self.current_theme.read().await.clone()
    }

    /// The current theme, or a state error when none has been resolved.
    pub async fn require_current(&self) -> AppResult<Theme> {
        self.current_theme().await.ok_or_else(|| {
            AppError::State("No theme is current; initialize the theme context first".to_string())
        })
    }

    /// Selectable themes, in display order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &Arc<dyn ThemeStore> {
        &self.store
    }
}
