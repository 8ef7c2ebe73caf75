//! Errors raised while talking to the retrieval service.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a request against the retrieval service.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    /// Connection to the service failed.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out at the transport level.
    #[error("Request to '{url}' timed out: {message}")]
    Timeout { url: String, message: String },

    /// Non-2xx response; the body is kept as diagnostic text.
    #[error("HTTP {status} error: {body}")]
    HttpStatus { status: u16, body: String },

    /// 2xx response whose body could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The request body could not be encoded.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Any other transport failure.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl RetrievalError {
    /// Build an error from a transport failure for `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => RetrievalError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(message) => RetrievalError::Timeout {
                url: url.to_string(),
                message,
            },
            HttpError::ServerError { status, message } => RetrievalError::HttpStatus {
                status,
                body: message,
            },
            HttpError::InvalidUrl(message) => RetrievalError::InvalidRequest { message },
            HttpError::Io(message) | HttpError::Other(message) => {
                RetrievalError::Other { message }
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RetrievalError::ConnectionFailed { .. } | RetrievalError::Timeout { .. } => {
                ErrorCategory::Network
            }
            RetrievalError::HttpStatus { status, .. } if *status >= 500 || *status == 429 => {
                ErrorCategory::Server
            }
            RetrievalError::HttpStatus { .. } | RetrievalError::InvalidRequest { .. } => {
                ErrorCategory::Client
            }
            RetrievalError::InvalidResponse { .. } => ErrorCategory::Server,
            RetrievalError::Other { .. } => ErrorCategory::Network,
        }
    }

    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            RetrievalError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            RetrievalError::InvalidResponse { .. } | RetrievalError::InvalidRequest { .. } => false,
            _ => self.category().is_retryable(),
        }
    }

    /// Get a user-friendly error message for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            RetrievalError::ConnectionFailed { .. } => {
                "Unable to reach the search service. Please check your connection.".to_string()
            }
            RetrievalError::Timeout { .. } => {
                "The search service took too long to answer.".to_string()
            }
            RetrievalError::HttpStatus { status, .. } => match *status {
                400 | 422 => "The search request was rejected. Try rephrasing the query.".to_string(),
                404 => "No matching verses were found.".to_string(),
                429 => "Too many searches. Please wait a moment and try again.".to_string(),
                500..=599 => "The search service is having trouble. Please try again later.".to_string(),
                _ => format!("The search service returned an error (HTTP {}).", status),
            },
            RetrievalError::InvalidResponse { .. } => {
                "The search service sent a response that could not be read.".to_string()
            }
            RetrievalError::InvalidRequest { message } => {
                format!("The search could not be sent: {}", message)
            }
            RetrievalError::Other { message } => format!("Search failed: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RetrievalError::ConnectionFailed { .. } => "E_NET_CONN",
            RetrievalError::Timeout { .. } => "E_NET_TIMEOUT",
            RetrievalError::HttpStatus { .. } => "E_NET_HTTP",
            RetrievalError::InvalidResponse { .. } => "E_NET_INVALID",
            RetrievalError::InvalidRequest { .. } => "E_NET_REQUEST",
            RetrievalError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl From<serde_json::Error> for RetrievalError {
    fn from(err: serde_json::Error) -> Self {
        RetrievalError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_maps_variants() {
        let err = RetrievalError::from_http(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://localhost:8000/search",
        );
        assert!(matches!(err, RetrievalError::ConnectionFailed { ref url, .. } if url.ends_with("/search")));

        let err = RetrievalError::from_http(
            HttpError::ServerError {
                status: 502,
                message: "bad gateway".to_string(),
            },
            "u",
        );
        assert!(matches!(err, RetrievalError::HttpStatus { status: 502, .. }));
    }

    #[test]
    fn test_categories_and_retry() {
        let server = RetrievalError::HttpStatus {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(server.category(), ErrorCategory::Server);
        assert!(server.is_retryable());

        let not_found = RetrievalError::HttpStatus {
            status: 404,
            body: "No verses found".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::Client);
        assert!(!not_found.is_retryable());

        let decode = RetrievalError::InvalidResponse {
            message: "eof".to_string(),
        };
        assert!(!decode.is_retryable());
    }

    #[test]
    fn test_display_keeps_diagnostic_body() {
        let err = RetrievalError::HttpStatus {
            status: 500,
            body: "Qdrant search failed".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 error: Qdrant search failed");
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors = vec![
            RetrievalError::ConnectionFailed {
                url: "u".to_string(),
                message: "m".to_string(),
            },
            RetrievalError::Timeout {
                url: "u".to_string(),
                message: "m".to_string(),
            },
            RetrievalError::HttpStatus {
                status: 418,
                body: String::new(),
            },
            RetrievalError::Other {
                message: "m".to_string(),
            },
        ];
        for err in errors {
            assert!(!err.user_message().is_empty(), "{:?}", err);
        }
    }
}
