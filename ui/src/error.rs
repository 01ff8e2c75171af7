use server::theme_store::StoreError;
use std::fmt::Display;

/// Application-wide error type for the Folio theming front-end.
///
/// The theme context itself never surfaces these from `initialize` or
/// `set_theme`; they are raised by configuration loading, palette import
/// and the few accessors that need a resolved theme.
///
/// # Error Categories
///
/// - [`Config`] - configuration loading and validation
/// - [`Store`] - theme store construction or direct store queries
/// - [`State`] - context used before it holds a theme
/// - [`Validation`] - a palette failed validation
/// - [`Io`] - reading or writing local files
///
/// # Examples
///
/// ```no_run
/// use folio::error::AppError;
///
/// fn log_app_error(error: &AppError) {
///     match error {
///         AppError::Store(msg) => log::warn!("theme store: {msg}"),
///         other => log::error!("{other}"),
///     }
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Store`]: AppError::Store
/// [`State`]: AppError::State
/// [`Validation`]: AppError::Validation
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Raised when `config.toml` or the environment cannot be read or
    /// contain values outside their limits.
    Config(String),

    /// Theme store failures that reach the caller.
    Store(String),

    /// The theme context was asked for state it does not hold yet.
    State(String),

    /// A theme palette was rejected.
    Validation(String),

    /// Local file access failures.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Store(msg) => write!(f, "Theme Store Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
