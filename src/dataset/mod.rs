//! Corpus loading and indexing.

mod index;
mod raw;
mod store;

pub use index::{build_detail, build_summaries, DatasetIndex};
pub use store::{parse_records, RecordStore};
