//! End-to-end tests for the proxy router, driving the axum `Router` directly
//! and mocking the upstream completion API with `httpmock`.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use api::{AppState, app};
use llm_service::config::llm_model_config::LlmModelConfig;
use llm_service::prompt::{SYSTEM_PROMPT, compose_prompt};
use llm_service::services::open_ai_service::OpenAiService;

fn test_config(base: &str) -> LlmModelConfig {
    LlmModelConfig {
        model: "gpt-3.5-turbo".into(),
        endpoint: base.into(),
        api_key: Some("test-key".into()),
        max_tokens: 500,
        temperature: 0.5,
        timeout_secs: Some(5),
    }
}

fn state_with_upstream(base: &str) -> Arc<AppState> {
    let service = OpenAiService::new(test_config(base)).unwrap();
    Arc::new(AppState::new(3000, Some(service)))
}

fn unconfigured_state() -> Arc<AppState> {
    Arc::new(AppState::new(3000, None))
}

async fn post_ai(state: Arc<AppState>, payload: Value) -> (StatusCode, Value) {
    let response = app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ai")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_ok_without_any_credential() {
    let response = app(unconfigured_state())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Fait AI Proxy Server is running");
}

#[tokio::test]
async fn missing_question_is_rejected() {
    let (status, body) = post_ai(unconfigured_state(), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Question is required");
}

#[tokio::test]
async fn empty_question_is_rejected() {
    let (status, body) = post_ai(unconfigured_state(), json!({ "question": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Question is required");
}

#[tokio::test]
async fn unconfigured_credential_yields_500_for_any_payload() {
    let (status, body) = post_ai(
        unconfigured_state(),
        json!({ "question": "Plan a push day" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI service not configured");
}

#[tokio::test]
async fn malformed_history_entry_is_rejected() {
    let (status, body) = post_ai(
        unconfigured_state(),
        json!({
            "question": "Plan a push day",
            "chatHistory": [{ "role": "robot", "content": "beep" }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn relays_completion_and_usage_with_ordered_messages() {
    let server = MockServer::start_async().await;

    let expected_upstream_body = json!({
        "model": "gpt-3.5-turbo",
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": "hi" },
            { "role": "assistant", "content": "Hello! Ready to train?" },
            {
                "role": "user",
                "content": compose_prompt(Some("Prefers dumbbells."), "Plan a push day")
            }
        ],
        "max_tokens": 500,
        "temperature": 0.5
    });

    let usage = json!({ "prompt_tokens": 42, "completion_tokens": 18, "total_tokens": 60 });
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body(expected_upstream_body.clone());
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Push day: done!" } }],
                "usage": usage.clone()
            }));
        })
        .await;

    let (status, body) = post_ai(
        state_with_upstream(&server.base_url()),
        json!({
            "question": "Plan a push day",
            "chatHistory": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "Hello! Ready to train?" }
            ],
            "userContext": { "contextString": "Prefers dumbbells." }
        }),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Push day: done!");
    assert_eq!(body["usage"], usage);
}

#[tokio::test]
async fn upstream_failure_echoes_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429).body("Rate limit reached");
        })
        .await;

    let (status, body) = post_ai(
        state_with_upstream(&server.base_url()),
        json!({ "question": "Plan a push day" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get AI response");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("429"));
    assert!(details.contains("Rate limit reached"));
}

#[tokio::test]
async fn empty_choices_is_an_unexpected_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(json!({ "choices": [], "usage": {} }));
        })
        .await;

    let (status, body) = post_ai(
        state_with_upstream(&server.base_url()),
        json!({ "question": "Plan a push day" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get AI response");
    assert!(body["details"].is_string());
}
