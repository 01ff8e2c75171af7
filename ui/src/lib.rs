//! # Folio UI Library
//!
//! Dynamic theming for the Folio portfolio site and the `folio` command-line
//! front-end that hosts it.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading from `config.toml` and the environment
//! - [`error`] - Application error type
//! - [`logger`] - Logging setup
//! - [`services`] - Construction of the configured theme store
//! - [`theme`] - Theme catalog, context, style surface and selector
//! - [`validation`] - Shared validation trait
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod config;
pub mod error;
pub mod logger;
pub mod services;
pub mod theme;
pub mod validation;

pub use error::{AppError, AppResult};
pub use validation::Validator;
