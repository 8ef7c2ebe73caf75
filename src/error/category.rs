//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems reaching the retrieval service.
    Network,

    /// The retrieval service answered with a 5xx or an unusable body.
    Server,

    /// The request itself was rejected (4xx other than rate limiting).
    Client,

    /// A corpus file is missing or malformed.
    Data,

    /// Invalid command-line or environment configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Data => "data",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the search service is reachable and try again",
            ErrorCategory::Server => "The search service may be busy. Please try again later",
            ErrorCategory::Client => "Try rephrasing the query",
            ErrorCategory::Data => "Check the dataset paths (QH_QURAN_DATASET, QH_HADITH_DATASET)",
            ErrorCategory::Configuration => "Run with --help to see the accepted options",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
