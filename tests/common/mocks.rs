//! Mock backends and canned search payloads.

pub use qh_search::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use qh_search::traits::{Headers, HttpClient, HttpError, Response};

use async_trait::async_trait;
use qh_search::error::RetrievalError;
use qh_search::models::{PositionRef, ResultItem, SearchQuery, SearchResult, SourceKind};
use qh_search::retrieval::SearchBackend;

/// JSON body the retrieval service returns for `query`.
pub fn search_response_json(query: &str) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "processed_query": format!("{} (processed)", query),
        "top_results": [
            {
                "source": "quran",
                "surah_name_ar": "البقرة",
                "ayah_id": 153,
                "arabic_text": "يَا أَيُّهَا الَّذِينَ آمَنُوا اسْتَعِينُوا بِالصَّبْرِ",
                "english_text": "O you who believe, seek help through patience",
                "score": 0.91234
            },
            {
                "source": "hadith",
                "collection_name": "Sahih Bukhari",
                "hadith_id": "1469",
                "arabic_text": "وَمَا أُعْطِيَ أَحَدٌ عَطَاءً خَيْرًا وَأَوْسَعَ مِنَ الصَّبْرِ",
                "narrator": "Abu Sa'id al-Khudri"
            }
        ],
        "llm_explanation": {"urdu": "*صبر* کی فضیلت"}
    })
}

pub fn sample_result(query: &str) -> SearchResult {
    SearchResult {
        query: query.to_string(),
        processed_query: None,
        items: vec![ResultItem {
            source_kind: Some(SourceKind::Verse),
            collection_ref: Some("Al-Baqarah".to_string()),
            position_ref: Some(PositionRef::Ayah("153".to_string())),
            arabic_text: "استعينوا بالصبر".to_string(),
            english_text: Some("Seek help through patience".to_string()),
            urdu_text: None,
            narrator: None,
            score: Some(0.5),
        }],
        explanation: Some("Patience is *light*".to_string()),
    }
}

/// Backend returning the same outcome for every query.
pub struct StaticBackend(Result<SearchResult, RetrievalError>);

impl StaticBackend {
    pub fn ok(result: SearchResult) -> Self {
        Self(Ok(result))
    }

    pub fn err(error: RetrievalError) -> Self {
        Self(Err(error))
    }
}

#[async_trait]
impl SearchBackend for StaticBackend {
    async fn search(&self, _query: &SearchQuery) -> Result<SearchResult, RetrievalError> {
        self.0.clone()
    }
}
