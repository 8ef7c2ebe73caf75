//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors and records every request so tests
//! can assert on what was sent.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
    /// Wait before producing the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    pub fn delayed(delay: Duration, response: MockResponse) -> Self {
        MockResponse::Delayed(delay, Box::new(response))
    }
}

/// Mock HTTP client for testing.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:8000/health",
///     MockResponse::Success(Response::json_body(&json!({"status": "healthy"}))),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Responses by URL, exact match first then prefix match
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses consumed in order before `responses`
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL, used for every matching request.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Queue a response for the next request to `url`.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        lock(&self.queued)
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = lock(&self.queued)
            .get_mut(url)
            .and_then(VecDeque::pop_front)
        {
            return Some(response);
        }

        let responses = lock(&self.responses);
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        if let Some(response) = responses
            .iter()
            .find(|(pattern, _)| url.starts_with(pattern.as_str()))
            .map(|(_, response)| response.clone())
        {
            return Some(response);
        }
        drop(responses);

        lock(&self.default_response).clone()
    }

    async fn respond(&self, url: &str) -> Result<Response, HttpError> {
        let mut next = self.get_response(url);
        loop {
            match next {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*inner);
                }
                None => {
                    return Err(HttpError::Other(format!("No mock response for URL: {}", url)))
                }
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond(url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond(url).await
    }
}
