//! Domain models shared by the dataset, search and rendering layers.

mod record;
mod search;

pub use record::{CollectionId, CollectionSummary, Record, SourceKind};
pub use search::{
    LlmExplanation, PositionRef, RawResultItem, ResultItem, SearchQuery, SearchResponse,
    SearchResult, SourceFilter,
};

use serde::Deserializer;

/// Helper to deserialize an optional id that may arrive as a string, an
/// integer, a float or null.
///
/// Integral floats are written without a fractional part so `1`, `1.0` and
/// `"1"` all normalize to `"1"`. Empty strings become `None`.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct OptIdVisitor;

    impl<'de> Visitor<'de> for OptIdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(format_number(value)))
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(OptIdVisitor)
        }
    }

    deserializer.deserialize_any(OptIdVisitor)
}

/// Helper to deserialize nullable strings as empty string.
/// Handles both missing fields and explicit null values.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::Deserialize;

    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Format a JSON number the way it reads in the source: `3.0` becomes `"3"`.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_opt_id")]
        id: Option<String>,
    }

    fn parse(json: &str) -> Option<String> {
        serde_json::from_str::<Wrapper>(json).unwrap().id
    }

    #[test]
    fn test_opt_id_accepts_numbers_and_strings() {
        assert_eq!(parse(r#"{"id": 7}"#), Some("7".to_string()));
        assert_eq!(parse(r#"{"id": "7"}"#), Some("7".to_string()));
        assert_eq!(parse(r#"{"id": 7.0}"#), Some("7".to_string()));
        assert_eq!(parse(r#"{"id": " 12 "}"#), Some("12".to_string()));
    }

    #[test]
    fn test_opt_id_null_missing_and_empty() {
        assert_eq!(parse(r#"{"id": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
        assert_eq!(parse(r#"{"id": ""}"#), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(2.5), "2.5");
    }
}
