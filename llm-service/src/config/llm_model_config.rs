/// Configuration for an OpenAI chat-completion invocation.
///
/// Collected once at startup and treated as immutable afterwards; handlers
/// receive it through shared state instead of reading the environment ad hoc.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gpt-3.5-turbo"`).
    pub model: String,

    /// Upstream API base URL (e.g., `"https://api.openai.com"`).
    pub endpoint: String,

    /// API key for authentication. `None` means the proxy boots but the
    /// completion endpoint reports itself as not configured.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature (controls creativity).
    pub temperature: f32,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
