//! POST /api/ai — proxies a coaching question to the OpenAI chat API.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use llm_service::prompt::build_messages;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ai::ai_request::{AiRequest, AiResponse},
};

/// Handler: POST /api/ai
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/ai \
///   -H 'content-type: application/json' \
///   -d '{"question":"Build me a push day","chatHistory":[]}'
/// ```
pub async fn ask_ai(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AiRequest>, JsonRejection>,
) -> AppResult<Json<AiResponse>> {
    let Json(body) = payload?;

    let question = body
        .question
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Question is required".into()))?;

    let service = state.openai.as_ref().ok_or(AppError::ServiceUnavailable)?;

    let context = body
        .user_context
        .as_ref()
        .and_then(|c| c.context_string.as_deref());

    debug!(
        question_len = question.len(),
        history_len = body.chat_history.len(),
        has_context = context.is_some(),
        "dispatching question upstream"
    );

    let messages = build_messages(question, body.chat_history, context);
    let outcome = service.chat(messages).await?;

    Ok(Json(AiResponse {
        response: outcome.content,
        usage: outcome.usage,
    }))
}
