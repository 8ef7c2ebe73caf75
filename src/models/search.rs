//! Search request and response types for the retrieval service.
//!
//! The wire types (`SearchResponse`, `RawResultItem`) mirror the service's
//! JSON and tolerate missing or malformed optional fields. They are converted
//! once into `SearchResult`, which the rest of the app works with.

use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_opt_id, SourceKind};

/// Number of results requested for every query.
pub const DEFAULT_TOP_K: u32 = 5;

/// Which corpora the retrieval service should search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    Both,
    Quran,
    Hadith,
}

/// Request body for `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub top_k: u32,
    #[serde(rename = "source")]
    pub source_filter: SourceFilter,
}

impl SearchQuery {
    /// Build a query from raw user input.
    ///
    /// Returns `None` when the input is blank after trimming.
    pub fn from_input(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            top_k: DEFAULT_TOP_K,
            source_filter: SourceFilter::Both,
        })
    }
}

/// Success body of `POST /search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub query: String,
    #[serde(default)]
    pub processed_query: Option<String>,
    #[serde(default)]
    pub top_results: Vec<RawResultItem>,
    #[serde(default)]
    pub llm_explanation: Option<LlmExplanation>,
}

/// One entry of `top_results` as sent by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResultItem {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub surah_name_ar: Option<String>,
    #[serde(default)]
    pub surah_name_en: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub ayah_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub hadith_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub arabic_text: String,
    #[serde(default)]
    pub urdu_text: Option<String>,
    #[serde(default)]
    pub english_text: Option<String>,
    #[serde(default)]
    pub narrator: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Generated explanation attached to a response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmExplanation {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub urdu: String,
}

/// Position of a result inside its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionRef {
    Ayah(String),
    Hadith(String),
    /// Hits that carry both ids show both
    AyahAndHadith { ayah: String, hadith: String },
}

/// A single search hit, with optional fields resolved to `Option`s.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    /// `None` when the service sent an unknown or missing `source`
    pub source_kind: Option<SourceKind>,
    pub collection_ref: Option<String>,
    pub position_ref: Option<PositionRef>,
    pub arabic_text: String,
    pub english_text: Option<String>,
    pub urdu_text: Option<String>,
    pub narrator: Option<String>,
    pub score: Option<f64>,
}

/// A successful search response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub query: String,
    pub processed_query: Option<String>,
    pub items: Vec<ResultItem>,
    pub explanation: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Ids of `0` are treated as absent, the way the web client hid them.
fn position(value: Option<String>) -> Option<String> {
    value.filter(|s| s != "0")
}

impl From<RawResultItem> for ResultItem {
    fn from(raw: RawResultItem) -> Self {
        let source_kind = raw.source.as_deref().and_then(SourceKind::from_wire);
        let collection_ref = non_empty(raw.surah_name_ar)
            .or_else(|| non_empty(raw.surah_name_en))
            .or_else(|| non_empty(raw.collection_name));
        let position_ref = match (position(raw.ayah_id), position(raw.hadith_id)) {
            (Some(ayah), Some(hadith)) => Some(PositionRef::AyahAndHadith { ayah, hadith }),
            (Some(ayah), None) => Some(PositionRef::Ayah(ayah)),
            (None, Some(hadith)) => Some(PositionRef::Hadith(hadith)),
            (None, None) => None,
        };

        Self {
            source_kind,
            collection_ref,
            position_ref,
            arabic_text: raw.arabic_text,
            english_text: non_empty(raw.english_text),
            urdu_text: non_empty(raw.urdu_text),
            narrator: non_empty(raw.narrator),
            score: raw.score.filter(|s| s.is_finite()),
        }
    }
}

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        Self {
            query: response.query,
            processed_query: non_empty(response.processed_query),
            items: response.top_results.into_iter().map(ResultItem::from).collect(),
            explanation: response
                .llm_explanation
                .map(|e| e.urdu)
                .filter(|text| !text.trim().is_empty()),
        }
    }
}
