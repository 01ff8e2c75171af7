use crate::common::HttpError;
use thiserror::Error;

/// Failure of a theme store operation.
///
/// "No rows" is not an error: lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The store answered with an error response
    #[error("Store API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A returned row could not be mapped into a theme record
    #[error("Malformed theme row: {0}")]
    MalformedRow(String),

    /// The store refused or could not perform the operation
    #[error("Theme store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::MalformedRow(err.to_string())
    }
}
