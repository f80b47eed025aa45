use llm_service::{
    config::default_config::config_openai_chat, error_handler::ConfigError,
    services::open_ai_service::OpenAiService,
};
use tracing::warn;

use crate::error_handler::AppResult;

/// Shared state for all HTTP handlers.
///
/// Built once at startup from the environment and shared behind an `Arc`;
/// nothing in here is mutated per request.
pub struct AppState {
    /// Listen port for the HTTP server.
    pub port: u16,
    /// Preconfigured OpenAI client. `None` when `OPENAI_API_KEY` is unset,
    /// in which case `POST /api/ai` reports the service as not configured.
    pub openai: Option<OpenAiService>,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// A missing API key is tolerated (the server still answers health
    /// checks); malformed numeric config is a hard startup error.
    pub fn from_env() -> AppResult<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) if !v.trim().is_empty() => {
                v.trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: "PORT",
                        reason: "expected u16 (1..=65535)",
                    })?
            }
            _ => 3000,
        };

        let cfg = config_openai_chat()?;
        let openai = match cfg.api_key {
            Some(_) => Some(OpenAiService::new(cfg)?),
            None => {
                warn!("OPENAI_API_KEY not set; /api/ai will report the service as not configured");
                None
            }
        };

        Ok(Self { port, openai })
    }

    /// Builds state from explicit parts, bypassing the environment.
    pub fn new(port: u16, openai: Option<OpenAiService>) -> Self {
        Self { port, openai }
    }
}
