// Integration tests for the retrieval service HTTP contract

mod common;

use common::search_response_json;
use qh_search::error::{ErrorCategory, RetrievalError};
use qh_search::models::{PositionRef, SearchQuery, SourceKind};
use qh_search::retrieval::{RetrievalClient, SearchBackend};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_posts_query_and_parses_results() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "text": "patience",
            "top_k": 5,
            "source": "both"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response_json("patience")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(format!("{}/", mock_server.uri()));
    let query = SearchQuery::from_input("  patience ").unwrap();
    let result = client.search(&query).await.unwrap();

    assert_eq!(result.query, "patience");
    assert_eq!(result.processed_query.as_deref(), Some("patience (processed)"));
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].source_kind, Some(SourceKind::Verse));
    assert_eq!(
        result.items[0].position_ref,
        Some(PositionRef::Ayah("153".to_string()))
    );
    assert_eq!(result.items[1].narrator.as_deref(), Some("Abu Sa'id al-Khudri"));
    assert_eq!(result.items[1].score, None);
    assert_eq!(result.explanation.as_deref(), Some("*صبر* کی فضیلت"));
}

#[tokio::test]
async fn test_non_success_status_keeps_body_as_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("index is rebuilding"))
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(mock_server.uri());
    let query = SearchQuery::from_input("mercy").unwrap();
    let err = client.search(&query).await.unwrap_err();

    match &err {
        RetrievalError::HttpStatus { status, body } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "index is rebuilding");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(mock_server.uri());
    let query = SearchQuery::from_input("mercy").unwrap();
    let err = client.search(&query).await.unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_through_search_backend_trait() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": "light",
            "top_results": []
        })))
        .mount(&mock_server)
        .await;

    let backend: Box<dyn SearchBackend> = Box::new(RetrievalClient::new(mock_server.uri()));
    let result = backend
        .search(&SearchQuery::from_input("light").unwrap())
        .await
        .unwrap();
    assert!(result.items.is_empty());
    assert!(result.explanation.is_none());
}

#[tokio::test]
async fn test_health_endpoint() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "service": "quran-hadith-retrieval"
        })))
        .mount(&mock_server)
        .await;

    let client = RetrievalClient::new(mock_server.uri());
    let status = client.health().await.unwrap();
    assert!(status.is_healthy());
    assert_eq!(status.service.as_deref(), Some("quran-hadith-retrieval"));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    // Nothing listens on port 1
    let client = RetrievalClient::new("http://127.0.0.1:1");
    let err = client
        .search(&SearchQuery::from_input("mercy").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(err.is_retryable());
}
