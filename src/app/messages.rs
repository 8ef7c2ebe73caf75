//! AppMessage enum for async communication within the application.

use super::search::RequestId;
use crate::error::RetrievalError;
use crate::models::SearchResult;

/// Messages sent back to the event loop by background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A search request finished
    SearchCompleted {
        request_id: RequestId,
        outcome: Result<SearchResult, RetrievalError>,
    },
    /// The selection notice timer of `generation` fired
    SelectionExpired { generation: u64 },
    /// Result of the startup health probe
    ServiceHealth { online: bool },
}
