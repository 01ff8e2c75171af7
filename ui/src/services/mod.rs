pub mod store_factory;

pub use store_factory::build_theme_store;
