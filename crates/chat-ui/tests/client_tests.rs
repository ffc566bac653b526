//! Integration tests for the chat service client

#![cfg(not(target_arch = "wasm32"))]

use helpdesk_chat_ui::{ChatClient, ChatConfig, ChatError, ChatService};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = ChatClient::builder()
        .base_url("http://localhost:8000/")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ChatClient::builder().build();
    assert!(matches!(result, Err(ChatError::Configuration(_))));

    let result = ChatClient::new("   ");
    assert!(matches!(result, Err(ChatError::Configuration(_))));
}

#[tokio::test]
async fn test_client_from_config() {
    let config = ChatConfig::default().with_api_base_url("http://helpdesk.internal:9000");
    let client = ChatClient::from_config(&config).unwrap();
    assert_eq!(client.base_url(), "http://helpdesk.internal:9000");
}

#[tokio::test]
async fn test_chat_posts_message_and_decodes_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "How do I reset my password?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Try the portal.",
            "followups": ["I'm locked out"],
            "confidence": "High",
            "explanations": ["matched KB article 12"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(mock_server.uri()).unwrap();
    let reply = client.chat("How do I reset my password?").await.unwrap();

    assert_eq!(reply.response, "Try the portal.");
    assert_eq!(reply.followups, vec!["I'm locked out"]);
    assert_eq!(reply.confidence.as_deref(), Some("High"));
    assert_eq!(reply.explanations, vec!["matched KB article 12"]);
}

#[tokio::test]
async fn test_bare_response_body_is_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Hello! How can I assist you with IT Helpdesk related queries?"
        })))
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(mock_server.uri()).unwrap();
    let reply = client.send("hi").await.unwrap();

    assert!(reply.followups.is_empty());
    assert!(reply.confidence.is_none());
    assert!(reply.explanations.is_empty());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model warming up"))
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(mock_server.uri()).unwrap();
    let result = client.chat("printer jammed").await;

    match result {
        Err(ChatError::ServerError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "model warming up");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(mock_server.uri()).unwrap();
    let result = client.chat("wifi").await;
    assert!(matches!(result, Err(ChatError::Serialization(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_reported() {
    // Nothing listens on port 1
    let client = ChatClient::new("http://127.0.0.1:1").unwrap();
    let result = client.chat("anyone there?").await;
    assert!(matches!(result, Err(ChatError::Request(_))));
}
