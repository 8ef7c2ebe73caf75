//! On-disk row shapes and their conversion into [`Record`]s.
//!
//! Ids arrive as numbers, strings or null depending on how the dataset was
//! exported, so they are read as raw JSON values and normalized here.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{format_number, CollectionId, Record, SourceKind};

/// One row of the verse dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawVerse {
    #[serde(default)]
    pub surah_id: Value,
    #[serde(default)]
    pub surah_name_ar: Option<String>,
    #[serde(default)]
    pub surah_name_en: Option<String>,
    #[serde(default)]
    pub ayah_id: Value,
    #[serde(default, alias = "text_ar")]
    pub arabic_text: Option<String>,
    #[serde(default, alias = "text_en")]
    pub english_text: Option<String>,
    #[serde(default, alias = "text_ur")]
    pub urdu_text: Option<String>,
    #[serde(default, alias = "quran_id")]
    pub original_id: Value,
}

/// One row of the narration dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawNarration {
    #[serde(default)]
    pub doc_id: Value,
    #[serde(default)]
    pub chapter_id: Value,
    #[serde(default)]
    pub chapter_name_ar: Option<String>,
    #[serde(default)]
    pub chapter_name_en: Option<String>,
    #[serde(default)]
    pub hadith_id: Value,
    #[serde(default, alias = "text_ar")]
    pub arabic_text: Option<String>,
    #[serde(default, alias = "text_en")]
    pub english_text: Option<String>,
    #[serde(default, alias = "text_ur")]
    pub urdu_text: Option<String>,
    #[serde(default)]
    pub narrator: Option<String>,
}

/// Normalize a JSON id to its string form. `1`, `1.0` and `"1"` give `"1"`.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => u.to_string(),
            (_, Some(i), _) => i.to_string(),
            (_, _, Some(f)) => format_number(f),
            _ => n.to_string(),
        }),
        _ => None,
    }
}

/// Like [`id_string`] but treats `0` as absent.
fn truthy_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => id_string(other),
    }
}

fn sequence_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl RawVerse {
    /// Validate into a [`Record`]. Fails only when `surah_id` is unusable.
    pub fn into_record(self) -> Result<Record, String> {
        let surah = id_string(&self.surah_id)
            .map(CollectionId::new)
            .ok_or_else(|| "missing surah_id".to_string())?;
        let sequence = sequence_number(&self.ayah_id);
        let id = id_string(&self.original_id)
            .unwrap_or_else(|| format!("{}:{}", surah, sequence.unwrap_or(0)));

        Ok(Record {
            id,
            collection_id: surah,
            collection_name_ar: self.surah_name_ar.unwrap_or_default().trim().to_string(),
            collection_name_en: self.surah_name_en.unwrap_or_default().trim().to_string(),
            sequence_number: sequence,
            arabic_text: self.arabic_text.unwrap_or_default(),
            english_text: text(self.english_text),
            urdu_text: text(self.urdu_text),
            narrator: None,
            source_kind: SourceKind::Verse,
        })
    }
}

impl RawNarration {
    /// Collection id of the row: a truthy `chapter_id`, else the Arabic
    /// chapter name, else `"unknown"`.
    pub fn collection_id(&self) -> CollectionId {
        let id = truthy_id(&self.chapter_id)
            .or_else(|| text(self.chapter_name_ar.clone()).map(|s| s.trim().to_string()))
            .unwrap_or_else(|| "unknown".to_string());
        CollectionId::new(id)
    }

    /// Convert into a [`Record`]; `index` is the row's position in the file.
    pub fn into_record(self, index: usize) -> Record {
        let collection_id = self.collection_id();
        let id = id_string(&self.doc_id)
            .unwrap_or_else(|| format!("{}:{}", collection_id, index));

        Record {
            id,
            collection_id,
            collection_name_ar: self.chapter_name_ar.unwrap_or_default().trim().to_string(),
            collection_name_en: self.chapter_name_en.unwrap_or_default().trim().to_string(),
            sequence_number: sequence_number(&self.hadith_id),
            arabic_text: self.arabic_text.unwrap_or_default(),
            english_text: text(self.english_text),
            urdu_text: text(self.urdu_text),
            narrator: text(self.narrator),
            source_kind: SourceKind::Narration,
        }
    }
}
