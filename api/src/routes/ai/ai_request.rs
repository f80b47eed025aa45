use serde::{Deserialize, Serialize};
use serde_json::Value;

use llm_service::prompt::ChatMessage;

/// Request payload for /api/ai.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRequest {
    /// Natural language question. Required; validated in the handler so the
    /// client gets a clear message instead of a serde rejection.
    #[serde(default)]
    pub question: Option<String>,
    /// Prior conversation turns, oldest first. Each entry must carry a valid
    /// role (`system` | `user` | `assistant`) and content.
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    /// Optional personalization context.
    #[serde(default)]
    pub user_context: Option<UserContext>,
}

/// Caller-supplied personalization container.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    #[serde(default)]
    pub context_string: Option<String>,
}

/// Response payload for /api/ai.
#[derive(Debug, Serialize)]
pub struct AiResponse {
    /// Content of the first upstream completion choice.
    pub response: String,
    /// Token-usage accounting, relayed from upstream as-is.
    pub usage: Value,
}
