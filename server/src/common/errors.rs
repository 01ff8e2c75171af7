use thiserror::Error;

/// HTTP-level failures raised while talking to the hosted database.
///
/// These carry transport context only. Responses that arrive but report an
/// application error are mapped to [`StoreError::Api`] instead.
///
/// # Examples
///
/// ```no_run
/// use server::common::errors::HttpError;
///
/// fn log_http_error(error: &HttpError) {
///     match error {
///         HttpError::RequestFailed { url, reason } => {
///             log::error!("HTTP request failed: url={}, reason={}", url, reason);
///         }
///         HttpError::Timeout { url, seconds } => {
///             log::warn!("HTTP request timeout: url={}, duration={}s", url, seconds);
///         }
///         _ => {
///             log::error!("HTTP error: {}", error);
///         }
///     }
/// }
/// ```
///
/// [`StoreError::Api`]: crate::theme_store::StoreError::Api
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP client initialization failed.
    ///
    /// Raised when the underlying client cannot be built, typically due to
    /// TLS setup or an invalid header value in the configured API key.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    /// The response arrived but did not have the expected shape.
    #[error("Invalid response: expected {expected}, got {actual}")]
    InvalidResponse { expected: String, actual: String },
}

impl HttpError {
    /// Classify a `reqwest` failure for the given URL.
    pub fn from_reqwest(url: &str, timeout_secs: u64, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                seconds: timeout_secs,
            }
        } else if err.is_decode() {
            HttpError::InvalidResponse {
                expected: "JSON body".to_string(),
                actual: err.to_string(),
            }
        } else {
            HttpError::RequestFailed {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}
