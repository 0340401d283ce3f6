use std::time::Duration;

use ide_agent_core::ai_client::{AiClient, ChatRequest};
use ide_agent_core::groq_client::GroqClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS: &str = "/openai/v1/chat/completions";

fn test_client(server: &MockServer, attempts: u32) -> GroqClient {
    GroqClient::new(&server.uri(), "test-model", "test-api-key")
        .with_retry(attempts, Duration::from_millis(5))
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
}

fn event_stream(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/event-stream")
}

#[tokio::test]
async fn chat_sends_model_auth_and_json_mode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "temperature": 0.5,
            "response_format": {"type": "json_object"},
            "reasoning_format": "hidden"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            r#"{"expected_field": "storage", "reason": "stores data"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let request = ChatRequest::user("classify me")
        .with_temperature(0.5)
        .json_mode()
        .hide_reasoning();

    let text = client.chat(request).await.unwrap().into_text().unwrap();
    assert!(text.contains("storage"));
}

#[tokio::test]
async fn explicit_model_is_not_overridden() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .and(body_partial_json(json!({"model": "other-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let mut request = ChatRequest::user("hi");
    request.model = Some("other-model".to_string());

    let text = client.chat(request).await.unwrap().into_text().unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn chat_streamed_concatenates_deltas() {
    let server = MockServer::start().await;

    let sse = concat!(
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\",\"content\":\"\"}}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"```rust\\n\"}}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"count += 1;\\n```\"}}]}\n\n",
        "data: [DONE]\n\n",
    );

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .and(body_partial_json(json!({"stream": true, "top_p": 0.95})))
        .respond_with(event_stream(sse))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let request = ChatRequest::user("write code").with_top_p(0.95);

    let text = client.chat_streamed(request).await.unwrap();
    assert_eq!(text, "```rust\ncount += 1;\n```");
}

#[tokio::test]
async fn retries_server_errors_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("recovered")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let text = client
        .chat(ChatRequest::user("hi"))
        .await
        .unwrap()
        .into_text()
        .unwrap();
    assert_eq!(text, "recovered");
}

#[tokio::test]
async fn rate_limit_exhausts_retry_budget() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server, 2);
    let err = client.chat(ChatRequest::user("hi")).await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("after 2 attempts"), "{message}");
    assert!(message.contains("429"), "{message}");
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let err = client.chat(ChatRequest::user("hi")).await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("401"), "{message}");
    assert!(message.contains("invalid api key"), "{message}");
}

#[tokio::test]
async fn unparseable_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let err = client.chat(ChatRequest::user("hi")).await.unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse Groq response"));
}

#[tokio::test]
async fn in_band_stream_error_is_an_error() {
    let server = MockServer::start().await;

    let sse = concat!(
        "data: {\"error\":{\"message\":\"rate limit reached\",\"type\":\"tokens\"}}\n\n",
        "data: [DONE]\n\n",
    );
    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(event_stream(sse))
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let err = client.chat_streamed(ChatRequest::user("hi")).await.unwrap_err();
    assert!(format!("{err:#}").contains("rate limit reached"), "{err:#}");
}

#[tokio::test]
async fn stream_without_done_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(event_stream(
            "data: {\"choices\":[{\"delta\":{\"content\":\"fn half(\"}}]}\n\n",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let err = client.chat_streamed(ChatRequest::user("hi")).await.unwrap_err();
    assert!(format!("{err:#}").contains("without [DONE]"), "{err:#}");
}

#[tokio::test]
async fn stream_open_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(event_stream(concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n\n",
            "data: [DONE]\n\n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let text = client.chat_streamed(ChatRequest::user("hi")).await.unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn stream_open_client_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad model"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let err = client.chat_streamed(ChatRequest::user("hi")).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("400"), "{message}");
    assert!(message.contains("bad model"), "{message}");
}
