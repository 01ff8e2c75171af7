/// Shortest request timeout accepted for the theme store (seconds)
pub const MIN_STORE_TIMEOUT_SECS: u64 = 1;

/// Longest request timeout accepted for the theme store (seconds)
pub const MAX_STORE_TIMEOUT_SECS: u64 = 120;

/// Default request timeout for the theme store (seconds)
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Default name of the theme table
pub const DEFAULT_THEME_TABLE: &str = "themes";
