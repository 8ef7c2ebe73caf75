//! Navigable indexes derived from the flat record arrays.
//!
//! Verse summaries are ordered by numeric surah id. Narration summaries keep
//! the order in which chapters first appear in the source file.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::store::RecordStore;
use crate::models::{CollectionId, CollectionSummary, Record, SourceKind};

/// One summary per distinct collection id of `kind`.
///
/// Each summary is built from the first record seen for its id.
pub fn build_summaries(records: &[Record], kind: SourceKind) -> Vec<CollectionSummary> {
    let mut seen: HashSet<&CollectionId> = HashSet::new();
    let mut summaries = Vec::new();

    for record in records.iter().filter(|r| r.source_kind == kind) {
        if !seen.insert(&record.collection_id) {
            continue;
        }
        summaries.push(summary_from(record, kind));
    }

    if kind == SourceKind::Verse {
        summaries.sort_by(|a, b| compare_numeric(&a.id, &b.id));
    }
    summaries
}

fn summary_from(record: &Record, kind: SourceKind) -> CollectionSummary {
    match kind {
        SourceKind::Verse => CollectionSummary {
            id: record.collection_id.clone(),
            name_ar: record.collection_name_ar.clone(),
            name_en: record.collection_name_en.clone(),
        },
        SourceKind::Narration => {
            let name_ar = [&record.collection_name_ar, &record.collection_name_en]
                .into_iter()
                .find(|name| !name.is_empty())
                .cloned()
                .unwrap_or_else(|| record.collection_id.to_string());
            CollectionSummary {
                id: record.collection_id.clone(),
                name_ar,
                name_en: record.collection_name_en.clone(),
            }
        }
    }
}

/// Numeric ids sort first in ascending order; non-numeric ids keep their order after them.
fn compare_numeric(a: &CollectionId, b: &CollectionId) -> Ordering {
    match (a.numeric(), b.numeric()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Records of `kind` belonging to `collection_id`.
///
/// Verses are ordered by ayah number (missing counts as 0); narrations keep
/// file order. An unknown id yields an empty list.
pub fn build_detail<'a>(
    records: &'a [Record],
    kind: SourceKind,
    collection_id: &str,
) -> Vec<&'a Record> {
    let mut detail: Vec<&Record> = records
        .iter()
        .filter(|r| r.source_kind == kind && r.collection_id.matches(collection_id))
        .collect();

    if kind == SourceKind::Verse {
        detail.sort_by_key(|r| r.sequence_number.unwrap_or(0));
    }
    detail
}

/// A [`RecordStore`] with its summary lists computed once.
#[derive(Debug, Clone, Default)]
pub struct DatasetIndex {
    store: RecordStore,
    verse_summaries: Vec<CollectionSummary>,
    narration_summaries: Vec<CollectionSummary>,
}

impl DatasetIndex {
    pub fn new(store: RecordStore) -> Self {
        let verse_summaries = build_summaries(store.records(SourceKind::Verse), SourceKind::Verse);
        let narration_summaries =
            build_summaries(store.records(SourceKind::Narration), SourceKind::Narration);
        tracing::debug!(
            surahs = verse_summaries.len(),
            chapters = narration_summaries.len(),
            "Collection index built"
        );
        Self {
            store,
            verse_summaries,
            narration_summaries,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn summaries(&self, kind: SourceKind) -> &[CollectionSummary] {
        match kind {
            SourceKind::Verse => &self.verse_summaries,
            SourceKind::Narration => &self.narration_summaries,
        }
    }

    pub fn summary(&self, kind: SourceKind, collection_id: &str) -> Option<&CollectionSummary> {
        self.summaries(kind)
            .iter()
            .find(|s| s.id.matches(collection_id))
    }

    pub fn detail(&self, kind: SourceKind, collection_id: &str) -> Vec<&Record> {
        build_detail(self.store.records(kind), kind, collection_id)
    }

    /// Heading of the detail screen for a collection.
    pub fn collection_title(&self, kind: SourceKind, collection_id: &str) -> String {
        let detail = self.detail(kind, collection_id);
        let first = detail.first();
        let non_empty = |s: &String| (!s.is_empty()).then(|| s.clone());

        match kind {
            SourceKind::Verse => first
                .and_then(|r| {
                    non_empty(&r.collection_name_ar).or_else(|| non_empty(&r.collection_name_en))
                })
                .unwrap_or_else(|| format!("سورہ {}", collection_id.trim())),
            SourceKind::Narration => first
                .and_then(|r| non_empty(&r.collection_name_ar))
                .unwrap_or_else(|| collection_id.trim().to_string()),
        }
    }
}
