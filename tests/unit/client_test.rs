//! Unit tests for the caller-side generation client

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sceneforge::client::{save_data_uri, ClientError, GenerateClient, RetryPolicy};
use sceneforge::response;

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        delay: Duration::from_millis(10),
    }
}

#[tokio::test]
async fn test_generate_parses_success_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "image": "data:image/png;base64,aGk=",
            "prompt": "anime style, a fox",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GenerateClient::new(server.uri());
    let generated = client.generate("anime", "a fox").await.unwrap();

    assert_eq!(generated.image, "data:image/png;base64,aGk=");
    assert_eq!(generated.prompt, "anime style, a fox");
}

#[tokio::test]
async fn test_rejected_request_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "Invalid style selected: watercolor",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GenerateClient::new(server.uri()).with_policy(fast_policy(3));
    let err = client
        .generate_with_retry("watercolor", "a fox")
        .await
        .unwrap_err();

    match err {
        ClientError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid style selected: watercolor");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_failure_is_retried_to_exhaustion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "Upstream inference error: model busy",
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = GenerateClient::new(server.uri()).with_policy(fast_policy(3));
    let err = client.generate_with_retry("anime", "a fox").await.unwrap_err();

    assert!(err.is_retryable());
    assert!(err.to_string().contains("model busy"));
}

#[tokio::test]
async fn test_failure_then_success_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "Upstream inference error: warming up",
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "image": "data:image/png;base64,aGk=",
            "prompt": "anime style, a fox",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GenerateClient::new(server.uri()).with_policy(fast_policy(5));
    let generated = client.generate_with_retry("anime", "a fox").await.unwrap();

    assert_eq!(generated.image, "data:image/png;base64,aGk=");
}

#[tokio::test]
async fn test_success_without_image_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GenerateClient::new(server.uri()).with_policy(fast_policy(3));
    let err = client.generate_with_retry("anime", "a fox").await.unwrap_err();

    assert!(matches!(err, ClientError::Protocol(_)));
}

#[test]
fn test_save_data_uri_writes_decodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = b"\x89PNG\r\n\x1a\nfake image bytes";
    let uri = response::png_data_uri(bytes);

    let path = save_data_uri(&uri, "manga", dir.path()).unwrap();

    let filename = path.file_name().unwrap().to_str().unwrap();
    assert!(filename.starts_with("generated-manga-"));
    assert!(filename.ends_with(".png"));
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_save_data_uri_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let err = save_data_uri("not a data uri", "manga", dir.path()).unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
}
