//! HTTP transport error types.

/// Errors from the HTTP transport.
///
/// Non-200 statuses are not errors here; callers inspect
/// [`HttpResponse::status`](super::HttpResponse::status) themselves.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
