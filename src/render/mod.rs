//! Turns a [`SearchResult`] into display units for the results overlay and
//! the one-shot CLI printer.
//!
//! Everything here is pure: no I/O and no failure paths.

mod emphasis;

pub use emphasis::{parse_emphasis, render_explanation, Run};

use crate::models::{PositionRef, ResultItem, SearchResult, SourceKind};

pub const EXPLANATION_HEADING: &str = "تفصیلی وضاحت";
pub const URDU_LABEL: &str = "اردو:";
pub const ENGLISH_LABEL: &str = "English:";
pub const NARRATOR_LABEL: &str = "Narrator:";
pub const SCORE_LABEL: &str = "Relevance Score:";

/// One result item with every label resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    pub source_label: &'static str,
    /// Collection name plus position, empty when neither is known
    pub reference_label: String,
    pub arabic_text: String,
    pub urdu_text: Option<String>,
    pub english_text: Option<String>,
    pub narrator: Option<String>,
    pub score_text: String,
}

/// Everything the results overlay shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResults {
    pub heading: String,
    pub summary: String,
    pub processed_query: Option<String>,
    pub units: Vec<DisplayUnit>,
    /// Explanation lines, each tokenized into runs
    pub explanation: Option<Vec<Vec<Run>>>,
}

/// Corpus label of a result. Unknown sources are labelled as Quran.
pub fn source_label(kind: Option<SourceKind>) -> &'static str {
    match kind {
        Some(SourceKind::Narration) => "حدیث",
        Some(SourceKind::Verse) | None => "قرآن",
    }
}

pub fn reference_label(collection: Option<&str>, position: Option<&PositionRef>) -> String {
    let position = position.map(|p| match p {
        PositionRef::Ayah(n) => format!("آیت {}", n),
        PositionRef::Hadith(n) => format!("حدیث {}", n),
        PositionRef::AyahAndHadith { ayah, hadith } => format!("آیت {} - حدیث {}", ayah, hadith),
    });

    match (collection, position) {
        (Some(name), Some(pos)) => format!("{} - {}", name, pos),
        (Some(name), None) => name.to_string(),
        (None, Some(pos)) => pos,
        (None, None) => String::new(),
    }
}

/// Four decimal places, or `N/A`.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) if score.is_finite() => format!("{:.4}", score),
        _ => "N/A".to_string(),
    }
}

fn render_item(item: &ResultItem) -> DisplayUnit {
    DisplayUnit {
        source_label: source_label(item.source_kind),
        reference_label: reference_label(item.collection_ref.as_deref(), item.position_ref.as_ref()),
        arabic_text: item.arabic_text.clone(),
        urdu_text: item.urdu_text.clone(),
        english_text: item.english_text.clone(),
        narrator: item.narrator.clone(),
        score_text: format_score(item.score),
    }
}

/// One display unit per result item, in order.
pub fn render(result: &SearchResult) -> Vec<DisplayUnit> {
    result.items.iter().map(render_item).collect()
}

pub fn render_results(result: &SearchResult) -> RenderedResults {
    let units = render(result);
    let summary = if units.is_empty() {
        "No results found".to_string()
    } else {
        format!("Found {} results", units.len())
    };

    RenderedResults {
        heading: format!("Search Results for: \"{}\"", result.query),
        summary,
        processed_query: result.processed_query.clone(),
        units,
        explanation: result.explanation.as_deref().map(render_explanation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ResultItem {
        ResultItem {
            source_kind: Some(SourceKind::Verse),
            collection_ref: Some("البقرة".to_string()),
            position_ref: Some(PositionRef::Ayah("153".to_string())),
            arabic_text: "يَا أَيُّهَا الَّذِينَ آمَنُوا".to_string(),
            english_text: Some("O you who believe".to_string()),
            urdu_text: None,
            narrator: None,
            score: Some(0.12345),
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(0.12345)), "0.1235");
        assert_eq!(format_score(Some(1.0)), "1.0000");
        assert_eq!(format_score(None), "N/A");
    }

    #[test]
    fn test_source_label_fallback() {
        assert_eq!(source_label(Some(SourceKind::Verse)), "قرآن");
        assert_eq!(source_label(Some(SourceKind::Narration)), "حدیث");
        assert_eq!(source_label(None), "قرآن");
    }

    #[test]
    fn test_reference_label() {
        assert_eq!(
            reference_label(Some("البقرة"), Some(&PositionRef::Ayah("153".to_string()))),
            "البقرة - آیت 153"
        );
        assert_eq!(
            reference_label(Some("Bukhari"), Some(&PositionRef::Hadith("7".to_string()))),
            "Bukhari - حدیث 7"
        );
        assert_eq!(
            reference_label(
                Some("البقرة"),
                Some(&PositionRef::AyahAndHadith {
                    ayah: "2".to_string(),
                    hadith: "7".to_string()
                })
            ),
            "البقرة - آیت 2 - حدیث 7"
        );
        assert_eq!(reference_label(Some("Bukhari"), None), "Bukhari");
        assert_eq!(reference_label(None, None), "");
    }

    #[test]
    fn test_render_item() {
        let result = SearchResult {
            query: "patience".to_string(),
            processed_query: None,
            items: vec![item()],
            explanation: None,
        };
        let units = render(&result);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].score_text, "0.1235");
        assert_eq!(units[0].reference_label, "البقرة - آیت 153");
        assert!(units[0].urdu_text.is_none());
        assert!(units[0].english_text.is_some());
    }

    #[test]
    fn test_render_results_summary() {
        let mut result = SearchResult {
            query: "patience".to_string(),
            processed_query: None,
            items: Vec::new(),
            explanation: Some("*صبر* اہم ہے".to_string()),
        };
        let rendered = render_results(&result);
        assert_eq!(rendered.heading, "Search Results for: \"patience\"");
        assert_eq!(rendered.summary, "No results found");
        let explanation = rendered.explanation.unwrap();
        assert!(explanation[0][0].is_emphasis());

        result.items = vec![item(), item()];
        assert_eq!(render_results(&result).summary, "Found 2 results");
    }
}
