//! Prompt assembly for the Fait AI coach.
//!
//! Builds the message sequence sent upstream: one fixed system message with
//! the persona instructions, the caller-supplied chat history verbatim, then
//! a single user message embedding the personalization context and the raw
//! question.

use serde::{Deserialize, Serialize};

/// Fixed persona instructions used as the single system message.
pub const SYSTEM_PROMPT: &str = "You are Fait's AI Coach, a friendly, knowledgeable, and concise fitness assistant inside the Fait app. Always be helpful, positive, and encouraging, but keep your responses brief and to the point. Use the user's data and context to personalize advice. If you provide a workout plan, give a short, natural explanation, then only include the JSON array of the plan. Do not list the workout in Markdown, text, or any other format. Never show the workout plan twice. Never omit the JSON array. Do not mention JSON, code, or formatting in your user-facing responses.";

/// Default personalization context when the caller supplies none.
pub const DEFAULT_CONTEXT: &str = "You are the AI Coach in the Fait app.";

/// Role tag of a chat message. Closed set: anything else fails to
/// deserialize, so malformed history is rejected at the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single role-tagged message. Ordering within a sequence is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Composes the user-prompt text: context string, the raw question, and the
/// fixed formatting instructions with the example workout-plan shape.
pub fn compose_prompt(context: Option<&str>, question: &str) -> String {
    let context = context.unwrap_or(DEFAULT_CONTEXT);
    format!(
        r#"
{context}

User Question: {question}

As Fait's AI Coach, you are a friendly, knowledgeable, and concise fitness assistant inside the Fait app. Always be helpful, positive, and encouraging, but keep your responses brief and to the point. Use the user's data and context to personalize advice. If you provide a workout plan, give a short, natural explanation, then only include the JSON array of the plan. Do not list the workout in Markdown, text, or any other format. Never show the workout plan twice. Never omit the JSON array. Do not mention JSON, code, or formatting in your user-facing responses.

Example workout plan format (do not mention this to the user):
[
  {{"name": "Barbell Bench Press", "sets": 3, "reps": 8, "weight": 95, "notes": ""}},
  {{"name": "Dumbbell Row", "sets": 3, "reps": 10, "weight": 30, "notes": ""}}
]
"#
    )
}

/// Builds the full upstream message sequence.
///
/// Invariant: exactly one system message first, then `history` unmodified
/// and in order, then one user message with the composed prompt.
pub fn build_messages(
    question: &str,
    history: Vec<ChatMessage>,
    context: Option<&str>,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend(history);
    messages.push(ChatMessage::user(compose_prompt(context, question)));
    messages
}
