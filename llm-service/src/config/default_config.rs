//! Default OpenAI config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`  = API key (optional at boot; required to serve requests)
//! - `OPENAI_MODEL`    = model identifier (default `gpt-3.5-turbo`)
//! - `OPENAI_BASE_URL` = API base URL (default `https://api.openai.com`)
//! - `MAX_TOKENS`      = optional max tokens (u32, default 500)
//! - `TEMPERATURE`     = optional sampling temperature (f32, default 0.7)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        LlmServiceError, env_opt, parse_opt_f32, parse_opt_u32, validate_http_endpoint,
        validate_range_f32,
    },
};

/// Default model when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default API base when `OPENAI_BASE_URL` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
/// Default completion budget when `MAX_TOKENS` is unset.
pub const DEFAULT_MAX_TOKENS: u32 = 500;
/// Default sampling temperature when `TEMPERATURE` is unset.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Constructs the OpenAI chat config from the environment.
///
/// A missing `OPENAI_API_KEY` is not an error here: the server must still
/// boot and answer health checks, with the completion endpoint reporting
/// itself as unconfigured per request.
///
/// # Errors
/// Returns [`LlmServiceError::Config`] when `MAX_TOKENS` / `TEMPERATURE`
/// fail to parse, the temperature is outside `0.0..=2.0`, or the base URL
/// has no http/https scheme.
pub fn config_openai_chat() -> Result<LlmModelConfig, LlmServiceError> {
    from_raw(
        env_opt("OPENAI_API_KEY"),
        env_opt("OPENAI_MODEL"),
        env_opt("OPENAI_BASE_URL"),
        env_opt("MAX_TOKENS"),
        env_opt("TEMPERATURE"),
    )
}

fn from_raw(
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    max_tokens: Option<String>,
    temperature: Option<String>,
) -> Result<LlmModelConfig, LlmServiceError> {
    let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let max_tokens = parse_opt_u32("MAX_TOKENS", max_tokens)?.unwrap_or(DEFAULT_MAX_TOKENS);

    let temperature = parse_opt_f32("TEMPERATURE", temperature)?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    Ok(LlmModelConfig {
        model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        endpoint,
        api_key,
        max_tokens,
        temperature,
        timeout_secs: None,
    })
}
