//! Common test utilities for integration tests.
//!
//! Dataset fixtures, search payloads and an `App` builder shared by the
//! integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{test_index, TestAppBuilder};
//!
//! let app = TestAppBuilder::new().build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use qh_search::app::App;
use qh_search::dataset::{DatasetIndex, RecordStore};
use qh_search::models::SourceKind;
use qh_search::retrieval::SearchBackend;

/// Three surahs, deliberately out of order and with ayahs shuffled.
pub const QURAN_JSON: &str = r#"[
    {"surah_id": 2, "surah_name_ar": "البقرة", "surah_name_en": "Al-Baqarah", "ayah_id": 2, "arabic_text": "ذَٰلِكَ الْكِتَابُ", "text_en": "This is the Book"},
    {"surah_id": 10, "surah_name_ar": "يونس", "surah_name_en": "Yunus", "ayah_id": 1, "arabic_text": "الر"},
    {"surah_id": 1, "surah_name_ar": "الفاتحة", "surah_name_en": "Al-Fatihah", "ayah_id": 1, "arabic_text": "بِسْمِ اللَّهِ", "text_ur": "اللہ کے نام سے"},
    {"surah_id": 2, "surah_name_ar": "البقرة", "surah_name_en": "Al-Baqarah", "ayah_id": 1, "arabic_text": "الم"}
]"#;

/// Narrations with `chapter_id` `[1, 1, 2]`.
pub const HADITH_JSON: &str = r#"[
    {"chapter_id": 1, "chapter_name_ar": "بدء الوحي", "chapter_name_en": "Revelation", "hadith_id": 1, "arabic_text": "إنما الأعمال بالنيات", "narrator": "Umar"},
    {"chapter_id": 1, "chapter_name_ar": "بدء الوحي", "chapter_name_en": "Revelation", "hadith_id": 2, "arabic_text": "أول ما بدئ به"},
    {"chapter_id": 2, "chapter_name_ar": "الإيمان", "chapter_name_en": "Belief", "hadith_id": 8, "arabic_text": "بني الإسلام على خمس"}
]"#;

/// Write `json` to `dir/name` and return the path.
pub fn write_dataset(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).expect("write dataset fixture");
    path
}

pub fn test_store() -> RecordStore {
    let quran = qh_search::dataset::parse_records(QURAN_JSON, SourceKind::Verse, Path::new("quran.json"))
        .expect("quran fixture parses");
    let hadith =
        qh_search::dataset::parse_records(HADITH_JSON, SourceKind::Narration, Path::new("hadith.json"))
            .expect("hadith fixture parses");
    RecordStore::from_records(quran, hadith)
}

pub fn test_index() -> Arc<DatasetIndex> {
    Arc::new(DatasetIndex::new(test_store()))
}

/// Builder for an `App` over the fixture datasets.
pub struct TestAppBuilder {
    index: Arc<DatasetIndex>,
    backend: Arc<dyn SearchBackend>,
    dimensions: Option<(u16, u16)>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            index: test_index(),
            backend: Arc::new(StaticBackend::ok(sample_result("patience"))),
            dimensions: None,
        }
    }

    pub fn with_backend(mut self, backend: Arc<dyn SearchBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    pub fn build(self) -> App {
        let mut app = App::new(self.index, self.backend);
        if let Some((width, height)) = self.dimensions {
            app.update_terminal_dimensions(width, height);
        }
        app
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
