//! In-memory holder of the two corpora.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::raw::{RawNarration, RawVerse};
use crate::error::DatasetError;
use crate::models::{Record, SourceKind};

/// Read-only store of verse and narration records, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    verses: Vec<Record>,
    narrations: Vec<Record>,
}

impl RecordStore {
    pub fn from_records(verses: Vec<Record>, narrations: Vec<Record>) -> Self {
        Self { verses, narrations }
    }

    /// Load both dataset files.
    pub fn load(quran_path: &Path, hadith_path: &Path) -> Result<Self, DatasetError> {
        let verses = load_file(quran_path, SourceKind::Verse)?;
        let narrations = load_file(hadith_path, SourceKind::Narration)?;
        tracing::info!(
            verses = verses.len(),
            narrations = narrations.len(),
            "Datasets loaded"
        );
        Ok(Self { verses, narrations })
    }

    pub fn records(&self, kind: SourceKind) -> &[Record] {
        match kind {
            SourceKind::Verse => &self.verses,
            SourceKind::Narration => &self.narrations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty() && self.narrations.is_empty()
    }
}

fn load_file(path: &Path, kind: SourceKind) -> Result<Vec<Record>, DatasetError> {
    tracing::debug!(path = %path.display(), kind = %kind, "Reading dataset");
    let json = std::fs::read_to_string(path).map_err(|e| DatasetError::from_io(path, e))?;
    parse_records(&json, kind, path)
}

/// Parse a dataset from its JSON text. `path` is only used in error reports.
pub fn parse_records(json: &str, kind: SourceKind, path: &Path) -> Result<Vec<Record>, DatasetError> {
    match kind {
        SourceKind::Verse => parse_rows::<RawVerse>(json, path)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                row.into_record()
                    .map_err(|reason| DatasetError::InvalidRecord {
                        path: path.to_path_buf(),
                        index,
                        reason,
                    })
            })
            .collect(),
        SourceKind::Narration => Ok(parse_rows::<RawNarration>(json, path)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.into_record(index))
            .collect()),
    }
}

fn parse_rows<T: DeserializeOwned>(json: &str, path: &Path) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
