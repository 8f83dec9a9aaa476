//! Error types for backend API calls.

use serde::Deserialize;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the message backend client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    /// Endpoint URL cannot carry path segments (e.g. a `data:` URL).
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Session cookie was missing, invalid, or expired (HTTP 401).
    #[error("unauthenticated: session rejected by the backend")]
    Unauthorized,

    /// The requested message does not exist (HTTP 404).
    #[error("message not found")]
    NotFound,

    /// Any other non-success response from the backend.
    #[error("backend returned HTTP {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error detail from the response body, empty if none was sent.
        detail: String,
    },
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    /// Human-readable reason, e.g. `"Please provide a search query"`.
    #[serde(default)]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_parses_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "page is out of range"}"#).unwrap();
        assert_eq!(body.detail, "page is out of range");
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, "");
    }

    #[test]
    fn status_error_displays_code_and_detail() {
        let err = Error::Status {
            status: 500,
            detail: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "backend returned HTTP 500: Internal Server Error"
        );
    }
}
