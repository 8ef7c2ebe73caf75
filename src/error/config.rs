//! Configuration errors for command-line and environment values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A flag that needs a value was given without one.
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    /// A value could not be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::MissingValue {
            flag: "--search".to_string(),
        };
        assert_eq!(err.to_string(), "Missing value for --search");
        assert_eq!(
            ConfigError::invalid("QH_SEARCH_URL", "must start with http").to_string(),
            "Invalid value for QH_SEARCH_URL: must start with http"
        );
    }
}
