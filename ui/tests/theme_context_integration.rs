use async_trait::async_trait;
use folio::theme::{
    InitOutcome, PersistStep, StyleSurface, StyleVariables, Theme, ThemeChange, ThemeContext,
    ThemeSelector, catalog,
};
use server::model::{ColorRole, GRADIENT_KEY, NewThemeRow, ThemeColors, ThemeRow};
use server::theme_store::{InMemoryThemeStore, StoreError, ThemeStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// Helper module for theme context testing
mod context_helpers {
    use super::*;

    /// Store wrapper that fails selected operations and counts calls
    #[derive(Default)]
    pub struct FlakyStore {
        pub inner: InMemoryThemeStore,
        pub fail_read: AtomicBool,
        pub fail_clear: AtomicBool,
        pub fail_insert: AtomicBool,
        pub fail_lookup: AtomicBool,
        pub inserts: AtomicUsize,
        pub updates: AtomicUsize,
    }

    fn unavailable(operation: &str) -> StoreError {
        StoreError::Unavailable(format!("{operation} refused by test store"))
    }

    #[async_trait]
    impl ThemeStore for FlakyStore {
        async fn read_active_theme(&self) -> Result<Option<ThemeRow>, StoreError> {
            if self.fail_read.load(Ordering::SeqCst) {
                return Err(unavailable("read"));
            }
            self.inner.read_active_theme().await
        }

        async fn clear_all_active(&self) -> Result<(), StoreError> {
            if self.fail_clear.load(Ordering::SeqCst) {
                return Err(unavailable("clear"));
            }
            self.inner.clear_all_active().await
        }

        async fn find_theme_by_name(&self, name: &str) -> Result<Option<ThemeRow>, StoreError> {
            if self.fail_lookup.load(Ordering::SeqCst) {
                return Err(unavailable("lookup"));
            }
            self.inner.find_theme_by_name(name).await
        }

        async fn update_theme(
            &self,
            id: &str,
            colors: &ThemeColors,
            active: bool,
        ) -> Result<(), StoreError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.inner.update_theme(id, colors, active).await
        }

        async fn insert_theme(&self, row: NewThemeRow) -> Result<ThemeRow, StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            if self.fail_insert.load(Ordering::SeqCst) {
                return Err(unavailable("insert"));
            }
            self.inner.insert_theme(row).await
        }

        async fn list_themes(&self) -> Result<Vec<ThemeRow>, StoreError> {
            self.inner.list_themes().await
        }
    }

    pub fn memory_context() -> (Arc<InMemoryThemeStore>, Arc<StyleVariables>, Arc<ThemeContext>) {
        let store = Arc::new(InMemoryThemeStore::new());
        let surface = Arc::new(StyleVariables::new());
        let context = Arc::new(ThemeContext::new(store.clone(), surface.clone()));
        (store, surface, context)
    }

    pub fn flaky_context() -> (Arc<FlakyStore>, Arc<StyleVariables>, Arc<ThemeContext>) {
        let store = Arc::new(FlakyStore::default());
        let surface = Arc::new(StyleVariables::new());
        let context = Arc::new(ThemeContext::new(store.clone(), surface.clone()));
        (store, surface, context)
    }

    /// Fresh context over the same store, as on the next page load
    pub fn reload(store: Arc<InMemoryThemeStore>) -> (Arc<StyleVariables>, ThemeContext) {
        let surface = Arc::new(StyleVariables::new());
        let context = ThemeContext::new(store, surface.clone());
        (surface, context)
    }

    pub fn assert_surface_matches(surface: &StyleVariables, theme: &Theme) {
        let vars = surface.variables();
        assert_eq!(vars.len(), ColorRole::ALL.len());
        assert!(!vars.contains_key(GRADIENT_KEY));
        for (role, value) in theme.colors.atomic() {
            assert_eq!(vars.get(role.as_str()).map(String::as_str), Some(value));
        }
    }

    pub fn theme(id: &str) -> Theme {
        catalog::find_by_id(id)
            .unwrap_or_else(|| panic!("catalog theme {id} missing"))
            .clone()
    }
}

use context_helpers::*;

mod initialization {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_falls_back_to_first_catalog_theme() {
        let (_, surface, context) = memory_context();

        assert_eq!(context.initialize().await, InitOutcome::Fallback);

        let current = context.current_theme().await.unwrap();
        assert_eq!(&current, catalog::default_theme());
        assert_surface_matches(&surface, &current);
    }

    #[tokio::test]
    async fn test_active_row_is_restored_with_store_id() {
        let forest = theme("forest");
        let store = Arc::new(InMemoryThemeStore::with_rows(vec![ThemeRow {
            id: "row-42".to_string(),
            name: forest.name.clone(),
            colors: forest.colors.clone(),
            is_active: true,
            created_at: None,
        }]));
        let (surface, context) = reload(store);

        assert_eq!(context.initialize().await, InitOutcome::Restored);

        let current = context.current_theme().await.unwrap();
        assert_eq!(current.id, "row-42");
        assert_eq!(current.name, "Forest");
        assert_eq!(current.colors, forest.colors);
        assert_surface_matches(&surface, &current);
    }

    #[tokio::test]
    async fn test_read_failure_leaves_no_theme_and_no_styling() {
        let (store, surface, context) = flaky_context();
        store.fail_read.store(true, Ordering::SeqCst);

        assert_eq!(context.initialize().await, InitOutcome::Failed);
        assert!(context.current_theme().await.is_none());
        assert!(surface.is_empty());
        assert!(context.is_initialized());
    }

    #[tokio::test]
    async fn test_initialize_does_not_rerun() {
        let (store, _, context) = memory_context();
        context.initialize().await;

        store
            .insert_theme(NewThemeRow {
                name: "Sunset".to_string(),
                colors: theme("sunset").colors,
                is_active: true,
            })
            .await
            .unwrap();

        assert_eq!(context.initialize().await, InitOutcome::AlreadyInitialized);
        assert_eq!(context.current_theme().await.unwrap().name, "Ocean");
    }
}

mod selection {
    use super::*;

    #[tokio::test]
    async fn test_ocean_scenario_takes_insert_branch() {
        let ocean = theme("ocean");
        let store = Arc::new(FlakyStore::default());
        let surface = Arc::new(StyleVariables::new());
        let context = ThemeContext::with_catalog(store.clone(), surface.clone(), vec![ocean.clone()])
            .unwrap();

        context.initialize().await;
        assert_eq!(context.current_theme().await.unwrap().name, "Ocean");
        assert!(store.inner.find_theme_by_name("Ocean").await.unwrap().is_none());

        let change = context.set_theme(ocean).await;
        assert!(matches!(change, ThemeChange::Inserted { .. }));
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
        assert_eq!(store.updates.load(Ordering::SeqCst), 0);

        let rows = store.inner.rows().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ocean");
        assert!(rows[0].is_active);
    }

    #[tokio::test]
    async fn test_reselection_keeps_a_single_row() {
        let (store, _, context) = memory_context();
        let midnight = theme("midnight");

        context.set_theme(midnight.clone()).await;
        let second = context.set_theme(midnight.clone()).await;
        assert!(matches!(second, ThemeChange::Updated { .. }));

        let named: Vec<_> = store
            .rows()
            .await
            .into_iter()
            .filter(|row| row.name == midnight.name)
            .collect();
        assert_eq!(named.len(), 1);
    }

    #[tokio::test]
    async fn test_switching_moves_the_active_flag() {
        let (store, surface, context) = memory_context();

        context.set_theme(theme("ocean")).await;
        context.set_theme(theme("sunset")).await;
        context.set_theme(theme("ocean")).await;

        let active = store.active_rows().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Ocean");
        assert_eq!(store.rows().await.len(), 2);
        assert_surface_matches(&surface, &theme("ocean"));
    }

    #[tokio::test]
    async fn test_selection_survives_reload() {
        let (store, _, context) = memory_context();
        let lavender = theme("lavender");
        context.initialize().await;
        context.set_theme(lavender.clone()).await;

        let (surface, reloaded) = reload(store);
        assert_eq!(reloaded.initialize().await, InitOutcome::Restored);
        let current = reloaded.current_theme().await.unwrap();
        assert_eq!(current.colors, lavender.colors);
        assert_surface_matches(&surface, &current);
    }

    #[tokio::test]
    async fn test_duplicate_names_update_the_oldest_row() {
        let sunset = theme("sunset");
        let row = |id: &str| ThemeRow {
            id: id.to_string(),
            name: sunset.name.clone(),
            colors: theme("ocean").colors,
            is_active: false,
            created_at: None,
        };
        let store = Arc::new(InMemoryThemeStore::with_rows(vec![row("first"), row("second")]));
        let context = ThemeContext::new(store.clone(), Arc::new(StyleVariables::new()));

        let change = context.set_theme(sunset.clone()).await;
        assert_eq!(
            change,
            ThemeChange::Updated {
                id: "first".to_string()
            }
        );

        let active = store.active_rows().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].colors, sunset.colors);
    }

    #[tokio::test]
    async fn test_partial_failure_switches_locally_only() {
        let (store, surface, context) = flaky_context();
        context.set_theme(theme("forest")).await;

        store.fail_insert.store(true, Ordering::SeqCst);
        let change = context.set_theme(theme("sunset")).await;

        assert_eq!(
            change,
            ThemeChange::PersistFailed {
                step: PersistStep::Insert
            }
        );
        assert_eq!(context.current_theme().await.unwrap().name, "Sunset");
        assert_surface_matches(&surface, &theme("sunset"));
        // Clearing succeeded before the insert failed
        assert!(store.inner.active_rows().await.is_empty());

        // Next page load self-heals to the catalog default
        let surface = Arc::new(StyleVariables::new());
        let reloaded = ThemeContext::new(store.clone(), surface);
        assert_eq!(reloaded.initialize().await, InitOutcome::Fallback);
    }

    #[tokio::test]
    async fn test_lookup_failure_skips_writes() {
        let (store, _, context) = flaky_context();
        store.fail_lookup.store(true, Ordering::SeqCst);

        let change = context.set_theme(theme("ocean")).await;
        assert_eq!(
            change,
            ThemeChange::PersistFailed {
                step: PersistStep::Lookup
            }
        );
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
        assert_eq!(store.updates.load(Ordering::SeqCst), 0);
        assert_eq!(context.current_theme().await.unwrap().name, "Ocean");
    }

    #[tokio::test]
    async fn test_clear_failure_still_writes_and_reports() {
        let (store, _, context) = flaky_context();
        store.fail_clear.store(true, Ordering::SeqCst);

        let change = context.set_theme(theme("ocean")).await;
        assert_eq!(
            change,
            ThemeChange::PersistFailed {
                step: PersistStep::ClearActive
            }
        );
        assert_eq!(store.inner.active_rows().await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_selections_leave_consistent_local_state() {
        let (_, surface, context) = memory_context();
        let ocean = theme("ocean");
        let sunset = theme("sunset");

        futures::join!(
            context.set_theme(ocean.clone()),
            context.set_theme(sunset.clone())
        );

        let current = context.current_theme().await.unwrap();
        assert!(current == ocean || current == sunset);
        assert_surface_matches(&surface, &current);
    }
}

mod threaded_selection {
    use super::*;
    use std::collections::BTreeMap;
    use std::time::Duration;

    /// Store whose name lookup for one theme is delayed
    struct DelayedLookupStore {
        inner: InMemoryThemeStore,
        delayed_name: String,
        delay: Duration,
    }

    #[async_trait]
    impl ThemeStore for DelayedLookupStore {
        async fn read_active_theme(&self) -> Result<Option<ThemeRow>, StoreError> {
            self.inner.read_active_theme().await
        }

        async fn clear_all_active(&self) -> Result<(), StoreError> {
            self.inner.clear_all_active().await
        }

        async fn find_theme_by_name(&self, name: &str) -> Result<Option<ThemeRow>, StoreError> {
            if name == self.delayed_name {
                tokio::time::sleep(self.delay).await;
            }
            self.inner.find_theme_by_name(name).await
        }

        async fn update_theme(
            &self,
            id: &str,
            colors: &ThemeColors,
            active: bool,
        ) -> Result<(), StoreError> {
            self.inner.update_theme(id, colors, active).await
        }

        async fn insert_theme(&self, row: NewThemeRow) -> Result<ThemeRow, StoreError> {
            self.inner.insert_theme(row).await
        }

        async fn list_themes(&self) -> Result<Vec<ThemeRow>, StoreError> {
            self.inner.list_themes().await
        }
    }

    /// Surface that stalls the first time one specific value is written
    struct SlowSurface {
        inner: StyleVariables,
        slow_value: String,
        stall: Duration,
        stalled: AtomicBool,
    }

    impl StyleSurface for SlowSurface {
        fn set_variable(&self, name: &str, value: &str) {
            if value == self.slow_value && !self.stalled.swap(true, Ordering::SeqCst) {
                std::thread::sleep(self.stall);
            }
            self.inner.set_variable(name, value);
        }

        fn variable(&self, name: &str) -> Option<String> {
            self.inner.variable(name)
        }

        fn variables(&self) -> BTreeMap<String, String> {
            self.inner.variables()
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_surface_matches_current_theme_across_threads() {
        let ocean = theme("ocean");
        let sunset = theme("sunset");

        let store = Arc::new(DelayedLookupStore {
            inner: InMemoryThemeStore::new(),
            delayed_name: sunset.name.clone(),
            delay: Duration::from_millis(50),
        });
        let surface = Arc::new(SlowSurface {
            inner: StyleVariables::new(),
            slow_value: ocean.colors.primary.clone(),
            stall: Duration::from_millis(200),
            stalled: AtomicBool::new(false),
        });
        let context = Arc::new(ThemeContext::new(store, surface.clone()));

        let first = tokio::spawn({
            let context = context.clone();
            let ocean = ocean.clone();
            async move { context.set_theme(ocean).await }
        });
        let second = tokio::spawn({
            let context = context.clone();
            let sunset = sunset.clone();
            async move { context.set_theme(sunset).await }
        });
        first.await.unwrap();
        second.await.unwrap();

        let current = context.current_theme().await.unwrap();
        for (role, value) in current.colors.atomic() {
            assert_eq!(
                surface.variable(role.as_str()).as_deref(),
                Some(value),
                "{role} on the surface does not belong to {}",
                current.name
            );
        }
    }
}

mod selector {
    use super::*;

    #[tokio::test]
    async fn test_selector_highlights_current_catalog_entry() {
        let (_, _, context) = memory_context();
        context.initialize().await;

        let mut selector = ThemeSelector::new(context.clone());
        let swatches = selector.swatches().await;
        assert_eq!(swatches.len(), catalog::themes().len());
        assert!(swatches[0].selected);
        assert_eq!(swatches.iter().filter(|s| s.selected).count(), 1);

        selector.move_down();
        selector.move_down();
        let change = selector.confirm().await.unwrap();
        assert!(matches!(change, ThemeChange::Inserted { .. }));

        let swatches = selector.swatches().await;
        assert!(swatches[2].selected);
        assert_eq!(swatches[2].gradient, catalog::themes()[2].colors.gradient);
    }

    #[tokio::test]
    async fn test_restored_theme_matches_by_id_only() {
        let ocean = theme("ocean");
        let store = Arc::new(InMemoryThemeStore::with_rows(vec![ThemeRow {
            id: "b7e2".to_string(),
            name: ocean.name.clone(),
            colors: ocean.colors.clone(),
            is_active: true,
            created_at: None,
        }]));
        let context = Arc::new(ThemeContext::new(store, Arc::new(StyleVariables::new())));
        context.initialize().await;

        let selector = ThemeSelector::new(context);
        assert!(selector.swatches().await.iter().all(|s| !s.selected));
        assert_eq!(selector.current_name().await.as_deref(), Some("Ocean"));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime")
    }

    proptest! {
        #[test]
        fn test_successful_selections_leave_one_active_row(
            picks in prop::collection::vec(0usize..6, 1..20)
        ) {
            let rt = runtime();
            rt.block_on(async {
                let (store, surface, context) = memory_context();
                let themes = catalog::themes();
                for pick in &picks {
                    let change = context.set_theme(themes[pick % themes.len()].clone()).await;
                    let persist_failed = matches!(change, ThemeChange::PersistFailed { .. });
                    prop_assert!(!persist_failed);
                }

                let active = store.active_rows().await;
                prop_assert_eq!(active.len(), 1);

                let last = &themes[picks[picks.len() - 1] % themes.len()];
                prop_assert_eq!(&active[0].name, &last.name);

                let vars = surface.variables();
                prop_assert_eq!(vars.len(), ColorRole::ALL.len());
                prop_assert!(!vars.contains_key(GRADIENT_KEY));
                Ok(())
            })?;
        }

        #[test]
        fn test_round_trip_through_store(index in 0usize..6) {
            let rt = runtime();
            rt.block_on(async {
                let (store, _, context) = memory_context();
                let chosen = catalog::themes()[index % catalog::themes().len()].clone();
                context.set_theme(chosen.clone()).await;

                let (_, reloaded) = reload(store);
                reloaded.initialize().await;
                let restored = reloaded.current_theme().await;
                prop_assert_eq!(restored.map(|t| t.colors), Some(chosen.colors));
                Ok(())
            })?;
        }
    }
}
