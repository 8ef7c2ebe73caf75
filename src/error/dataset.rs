//! Errors raised while loading the corpus files.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load one of the two corpus files.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file does not exist.
    #[error("Dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of records.
    #[error("Invalid dataset {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A row is missing a field that cannot be defaulted.
    #[error("Invalid record #{index} in {}: {reason}", path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        reason: String,
    },
}

impl DatasetError {
    /// Build an error from an I/O failure, mapping `NotFound` to its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound { path }
        } else {
            DatasetError::Io { path, source }
        }
    }

    /// Path of the offending file.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DatasetError::NotFound { path }
            | DatasetError::Io { path, .. }
            | DatasetError::Parse { path, .. }
            | DatasetError::InvalidRecord { path, .. } => path,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DatasetError::NotFound { .. } => "E_DATA_NOT_FOUND",
            DatasetError::Io { .. } => "E_DATA_IO",
            DatasetError::Parse { .. } => "E_DATA_PARSE",
            DatasetError::InvalidRecord { .. } => "E_DATA_RECORD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = DatasetError::from_io(
            "/nope/quran.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, DatasetError::NotFound { .. }));
        assert_eq!(err.path(), std::path::Path::new("/nope/quran.json"));
        assert_eq!(err.to_string(), "Dataset not found: /nope/quran.json");
    }

    #[test]
    fn test_from_io_other() {
        let err = DatasetError::from_io(
            "q.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.error_code(), "E_DATA_IO");
    }
}
