//! Corpus records and the collection summaries derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two corpora a record or view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The Quran, grouped by surah.
    Verse,
    /// Sahih al-Bukhari, grouped by chapter.
    Narration,
}

impl SourceKind {
    /// Both kinds, in the order they appear in the navigation.
    pub const ALL: [SourceKind; 2] = [SourceKind::Verse, SourceKind::Narration];

    /// Short English label used in navigation and selection notices.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Verse => "Quran",
            SourceKind::Narration => "Hadith",
        }
    }

    /// Urdu heading of the collection list screen.
    pub fn list_heading(&self) -> &'static str {
        match self {
            SourceKind::Verse => "سورہ جات",
            SourceKind::Narration => "احادیث جات",
        }
    }

    /// Value of the `source` field used by the retrieval service.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SourceKind::Verse => "quran",
            SourceKind::Narration => "hadith",
        }
    }

    /// Parse the retrieval service's `source` field. Unknown values yield `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quran" => Some(SourceKind::Verse),
            "hadith" => Some(SourceKind::Narration),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized collection identifier.
///
/// Source datasets mix numeric and string ids; both are stored as the string
/// form so lookups compare like with like. Integer-valued strings are kept in
/// canonical form, so `"01"`, `" 1"` and `1` name the same collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(canonical(&id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it is an integer.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Whether this id refers to the same collection as `other`.
    pub fn matches(&self, other: &str) -> bool {
        self.0 == canonical(other)
    }
}

fn canonical(id: &str) -> String {
    let trimmed = id.trim();
    match trimmed.parse::<u64>() {
        Ok(n) => n.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for CollectionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// One verse or narration entry, validated at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub collection_id: CollectionId,
    /// Empty when the source row has no Arabic collection name
    pub collection_name_ar: String,
    /// Empty when the source row has no English collection name
    pub collection_name_en: String,
    /// Ayah number or hadith number
    pub sequence_number: Option<u32>,
    pub arabic_text: String,
    pub english_text: Option<String>,
    pub urdu_text: Option<String>,
    pub narrator: Option<String>,
    pub source_kind: SourceKind,
}

/// A navigable collection: one surah or one hadith chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: CollectionId,
    pub name_ar: String,
    pub name_en: String,
}

impl CollectionSummary {
    /// Name shown in lists and selection notices: Arabic, else English, else the id.
    pub fn display_name(&self) -> &str {
        [self.name_ar.as_str(), self.name_en.as_str()]
            .into_iter()
            .find(|name| !name.trim().is_empty())
            .unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_wire_round() {
        assert_eq!(SourceKind::from_wire("quran"), Some(SourceKind::Verse));
        assert_eq!(SourceKind::from_wire("Hadith"), Some(SourceKind::Narration));
        assert_eq!(SourceKind::from_wire("tafsir"), None);
        assert_eq!(SourceKind::Verse.wire_name(), "quran");
    }

    #[test]
    fn test_collection_id_numeric() {
        assert_eq!(CollectionId::from("114").numeric(), Some(114));
        assert_eq!(CollectionId::from("كتاب").numeric(), None);
    }

    #[test]
    fn test_collection_id_matches_trims() {
        let id = CollectionId::from(" 2 ");
        assert_eq!(id.as_str(), "2");
        assert!(id.matches("2"));
        assert!(id.matches(" 2"));
        assert!(!id.matches("20"));
        assert!(id.matches("02"));
    }

    #[test]
    fn test_summary_display_name_fallback() {
        let mut summary = CollectionSummary {
            id: CollectionId::from("7"),
            name_ar: String::new(),
            name_en: "Al-A'raf".to_string(),
        };
        assert_eq!(summary.display_name(), "Al-A'raf");
        summary.name_en.clear();
        assert_eq!(summary.display_name(), "7");
    }
}
