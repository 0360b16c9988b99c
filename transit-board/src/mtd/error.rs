//! Transit API error types.

use crate::http::HttpError;

/// Errors that can occur when interacting with the transit API.
#[derive(Debug, thiserror::Error)]
pub enum MtdError {
    /// Transport failed or the body was not valid JSON
    #[error(transparent)]
    Http(#[from] HttpError),

    /// API answered with a non-200 HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API answered 200 but reported a failure in its status block
    #[error("API status {code}: {message}")]
    Status { code: u16, message: String },

    /// Response lacked a required collection
    #[error("response missing `{0}`")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MtdError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = MtdError::Status {
            code: 401,
            message: "invalid key".into(),
        };
        assert_eq!(err.to_string(), "API status 401: invalid key");

        let err = MtdError::MissingField("stops");
        assert_eq!(err.to_string(), "response missing `stops`");
    }
}
