//! Search request lifecycle.
//!
//! The session only tracks state. The app spawns the actual request (see
//! [`spawn_search`]) and feeds its completion back through [`SearchSession::complete`].

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::error::RetrievalError;
use crate::models::{SearchQuery, SearchResult};
use crate::retrieval::SearchBackend;

/// Identifies one submitted request. Ids increase with every submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub enum SearchSessionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(Arc<SearchResult>),
    Failed,
}

/// Tracks the current request, the displayed result and the error banner.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchSessionState,
    /// Result shown in the overlay; survives a later failed search
    displayed: Option<Arc<SearchResult>>,
    error_banner: Option<String>,
    latest: Option<RequestId>,
    next_id: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `raw_text`.
    ///
    /// Blank input is a no-op and returns `None`. Otherwise the session enters
    /// `Submitting` and returns the query the caller must send, tagged with
    /// its request id.
    pub fn submit(&mut self, raw_text: &str) -> Option<(RequestId, SearchQuery)> {
        let query = SearchQuery::from_input(raw_text)?;
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.latest = Some(id);
        self.state = SearchSessionState::Submitting;
        self.error_banner = None;
        tracing::info!(request = %id, query = %query.text, "Search submitted");
        Some((id, query))
    }

    /// Apply the outcome of request `id`. Returns `false` for stale completions.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<SearchResult, RetrievalError>,
    ) -> bool {
        if self.latest != Some(id) {
            tracing::debug!(request = %id, latest = ?self.latest, "Discarding stale search completion");
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(request = %id, items = result.items.len(), "Search succeeded");
                let result = Arc::new(result);
                self.displayed = Some(Arc::clone(&result));
                self.state = SearchSessionState::Succeeded(result);
            }
            Err(err) => {
                tracing::error!(
                    request = %id,
                    code = err.error_code(),
                    error = %err,
                    "Search failed"
                );
                self.error_banner = Some(err.user_message());
                self.state = SearchSessionState::Failed;
            }
        }
        true
    }

    /// Dismiss the displayed result and the banner.
    ///
    /// A request still in flight is not invalidated; its completion will
    /// still be applied.
    pub fn close(&mut self) {
        self.displayed = None;
        self.error_banner = None;
        self.state = SearchSessionState::Idle;
    }

    pub fn state(&self) -> &SearchSessionState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, SearchSessionState::Submitting)
    }

    pub fn displayed(&self) -> Option<&SearchResult> {
        self.displayed.as_deref()
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }
}

/// Run `query` on `backend` in a background task and report the outcome as
/// [`AppMessage::SearchCompleted`].
pub fn spawn_search<B>(
    backend: Arc<B>,
    request_id: RequestId,
    query: SearchQuery,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()>
where
    B: SearchBackend + ?Sized + 'static,
{
    tokio::spawn(async move {
        let outcome = backend.search(&query).await;
        let _ = message_tx.send(AppMessage::SearchCompleted {
            request_id,
            outcome,
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(query: &str) -> SearchResult {
        SearchResult {
            query: query.to_string(),
            processed_query: None,
            items: Vec::new(),
            explanation: None,
        }
    }

    fn failure() -> RetrievalError {
        RetrievalError::HttpStatus {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut session = SearchSession::new();
        assert!(session.submit("   ").is_none());
        assert!(matches!(session.state(), SearchSessionState::Idle));
        assert!(session.latest_request().is_none());
    }

    #[test]
    fn test_submit_then_success() {
        let mut session = SearchSession::new();
        let (id, query) = session.submit(" mercy ").unwrap();
        assert_eq!(query.text, "mercy");
        assert_eq!(query.top_k, 5);
        assert!(session.is_searching());

        assert!(session.complete(id, Ok(result("mercy"))));
        assert!(matches!(session.state(), SearchSessionState::Succeeded(_)));
        assert_eq!(session.displayed().unwrap().query, "mercy");
    }

    #[test]
    fn test_failure_keeps_previous_result_and_sets_banner() {
        let mut session = SearchSession::new();
        let (first, _) = session.submit("one").unwrap();
        session.complete(first, Ok(result("one")));

        let (second, _) = session.submit("two").unwrap();
        assert!(session.error_banner().is_none());
        assert!(session.complete(second, Err(failure())));

        assert!(matches!(session.state(), SearchSessionState::Failed));
        assert_eq!(session.displayed().unwrap().query, "one");
        assert!(session.error_banner().is_some());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut session = SearchSession::new();
        let (first, _) = session.submit("one").unwrap();
        let (second, _) = session.submit("two").unwrap();
        assert!(second > first);

        assert!(session.complete(second, Ok(result("two"))));
        assert!(!session.complete(first, Ok(result("one"))));
        assert_eq!(session.displayed().unwrap().query, "two");
    }

    #[test]
    fn test_close_clears_result_and_banner() {
        let mut session = SearchSession::new();
        let (id, _) = session.submit("q").unwrap();
        session.complete(id, Err(failure()));
        session.close();

        assert!(session.displayed().is_none());
        assert!(session.error_banner().is_none());
        assert!(matches!(session.state(), SearchSessionState::Idle));
    }
}
