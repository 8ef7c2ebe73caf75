//! Error types for qh-search.
//!
//! Each layer has its own error enum:
//!
//! - [`RetrievalError`] for requests against the retrieval service
//! - [`DatasetError`] for loading the two corpus files
//! - [`ConfigError`] for bad flags and environment values
//!
//! [`QhError`] unifies them for reporting at the top level, and
//! [`ErrorCategory`] drives recovery hints.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Server | 5xx, unreadable body | Yes |
//! | Client | Rejected request | No |
//! | Data | Missing or malformed corpus | No |
//! | Configuration | Bad flags or env | No |

mod category;
mod config;
mod dataset;
mod network;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use dataset::DatasetError;
pub use network::RetrievalError;

use thiserror::Error;

/// Unified error type.
#[derive(Debug, Error)]
pub enum QhError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias using [`QhError`].
pub type QhResult<T> = Result<T, QhError>;

impl QhError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QhError::Retrieval(e) => e.category(),
            QhError::Dataset(_) => ErrorCategory::Data,
            QhError::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            QhError::Retrieval(e) => e.is_retryable(),
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            QhError::Retrieval(e) => e.user_message(),
            other => other.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            QhError::Retrieval(e) => e.error_code(),
            QhError::Dataset(e) => e.error_code(),
            QhError::Config(_) => "E_CONFIG",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let net: QhError = RetrievalError::Timeout {
            url: "http://localhost:8000/search".to_string(),
            message: "slow".to_string(),
        }
        .into();
        let data: QhError = DatasetError::NotFound {
            path: "quran.json".into(),
        }
        .into();
        let config: QhError = ConfigError::MissingValue {
            flag: "--url".to_string(),
        }
        .into();

        assert_eq!(net.category(), ErrorCategory::Network);
        assert_eq!(data.category(), ErrorCategory::Data);
        assert_eq!(config.category(), ErrorCategory::Configuration);

        assert!(net.is_retryable());
        assert!(!data.is_retryable());

        assert_eq!(data.error_code(), "E_DATA_NOT_FOUND");
        assert_eq!(config.error_code(), "E_CONFIG");
        assert_eq!(data.user_message(), "Dataset not found: quran.json");
        assert!(data.recovery_hint().contains("QH_QURAN_DATASET"));
    }
}
