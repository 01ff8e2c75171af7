//! # Folio Server Library
//!
//! Persistence side of the Folio theming system: the palette data model
//! shared with the hosted database and the theme store adapters.
//!
//! ## Modules
//!
//! - [`model`] - Color roles, palettes and persisted theme rows
//! - [`theme_store`] - Theme store contract plus REST and in-memory implementations
//! - [`common`] - Shared HTTP error types

pub mod common;
pub mod model;
pub mod theme_store;
