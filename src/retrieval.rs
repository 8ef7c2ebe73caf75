//! Client for the remote retrieval service.
//!
//! Two endpoints are used: `POST /search` for queries and `GET /health` for the
//! startup connectivity probe. No retries and no timeout are applied here.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::ReqwestHttpClient;
use crate::error::RetrievalError;
use crate::models::{SearchQuery, SearchResponse, SearchResult};
use crate::traits::{Headers, HttpClient};

/// Default base URL of the retrieval service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Anything that can answer a [`SearchQuery`].
///
/// The app depends on this seam rather than on a concrete client.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, RetrievalError>;
}

/// HTTP client for the retrieval service.
#[derive(Debug, Clone)]
pub struct RetrievalClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    http: Arc<C>,
}

impl RetrievalClient<ReqwestHttpClient> {
    /// Client using reqwest against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> RetrievalClient<C> {
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            http: Arc::new(http),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Run one query against `POST /search`.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, RetrievalError> {
        let url = self.search_url();
        let body = serde_json::to_string(query).map_err(|e| RetrievalError::InvalidRequest {
            message: e.to_string(),
        })?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::info!(query = %query.text, top_k = query.top_k, "Sending search request");
        let response = self
            .http
            .post(&url, &body, &headers)
            .await
            .map_err(|e| RetrievalError::from_http(e, &url))?;
        tracing::info!(status = response.status, "Search response received");

        if !response.is_success() {
            let body = response.text_lossy();
            tracing::error!(status = response.status, body = %body, "Search request failed");
            return Err(RetrievalError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed: SearchResponse = response.json()?;
        let result = SearchResult::from(parsed);
        tracing::debug!(items = result.items.len(), "Search response decoded");
        Ok(result)
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, RetrievalError> {
        let url = self.health_url();
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| RetrievalError::from_http(e, &url))?;

        if !response.is_success() {
            return Err(RetrievalError::HttpStatus {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        Ok(response.json()?)
    }
}

#[async_trait]
impl<C: HttpClient> SearchBackend for RetrievalClient<C> {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, RetrievalError> {
        RetrievalClient::search(self, query).await
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
