//! # Theme System Module
//!
//! Dynamic theming for the Folio portfolio site. A theme is a named palette
//! of atomic color roles plus a gradient expression; the active choice is
//! persisted in the hosted theme store and projected onto a style surface
//! that the site's views read.
//!
//! ## Architecture
//!
//! - **[`catalog`]** - Built-in, immutable list of selectable themes
//! - **[`ThemeContext`]** - Current theme state, store synchronization and styling
//! - **[`StyleSurface`]** - Global style variables written by the context
//! - **[`ThemeSelector`]** - Swatch list forwarding selections to the context
//! - **[`import`]** - TOML palette files for themes outside the catalog
//!
//! ## Basic Usage
//!
//! ```no_run
//! use folio::theme::{StyleVariables, ThemeContext, ThemeSelector};
//! use server::theme_store::InMemoryThemeStore;
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let surface = Arc::new(StyleVariables::new());
//! let context = Arc::new(ThemeContext::new(
//!     Arc::new(InMemoryThemeStore::new()),
//!     surface.clone(),
//! ));
//!
//! // Once at start-up: persisted theme, or the first catalog entry
//! context.initialize().await;
//!
//! // User picks the third swatch
//! let mut selector = ThemeSelector::new(context.clone());
//! selector.select(2).await;
//!
//! println!("{}", surface.to_css());
//! # }
//! ```
//!
//! ## Error Handling and Fallbacks
//!
//! - **Nothing persisted** - Falls back to the first catalog theme
//! - **Store read fails** - No theme is current and nothing is styled
//! - **Store write fails** - The theme still switches for this session; the
//!   next start-up falls back if no record ended up active

pub mod catalog;
pub mod context;
pub mod import;
pub mod selector;
pub mod style;
pub mod types;
pub mod validation;

pub use context::{InitOutcome, PersistStep, ThemeChange, ThemeContext};
pub use selector::{Swatch, ThemeSelector};
pub use style::{StyleSurface, StyleVariables};
pub use types::Theme;
