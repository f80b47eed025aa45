//! Application error type and its HTTP mapping.
//!
//! Handlers return [`AppResult`]; `IntoResponse` translates each variant to
//! a status code and a generic JSON error body. Upstream failures echo the
//! upstream status and body text in `details`; stack traces never leave the
//! server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use llm_service::error_handler::{ConfigError, LlmServiceError, ProviderError};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    /// Client omitted or malformed a required field.
    #[error("{0}")]
    InvalidRequest(String),

    /// The upstream credential is not configured.
    #[error("AI service not configured")]
    ServiceUnavailable,

    /// Upstream completion API answered with a non-2xx status.
    #[error("OpenAI API error: {} - {body}", status.as_u16())]
    Upstream { status: StatusCode, body: String },

    /// Any other failure while serving the request (transport, decoding).
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::InvalidRequest(msg) => ErrorBody {
                error: msg.clone(),
                details: None,
            },
            AppError::ServiceUnavailable => ErrorBody {
                error: self.to_string(),
                details: None,
            },
            AppError::Upstream { .. } => ErrorBody {
                error: "Failed to get AI response".into(),
                details: Some(self.to_string()),
            },
            AppError::Unexpected(msg) => ErrorBody {
                error: "Failed to get AI response".into(),
                details: Some(msg.clone()),
            },
            // Startup-only variants; kept generic if they ever surface.
            _ => ErrorBody {
                error: "Internal server error".into(),
                details: None,
            },
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::warn!(%status, error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert Axum JSON rejections (bad body, bad history shape) to 400.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

/// Map service-layer errors to their HTTP meaning: config problems stay
/// startup errors, upstream HTTP failures echo status and body, everything
/// else is an unexpected failure.
impl From<LlmServiceError> for AppError {
    fn from(err: LlmServiceError) -> Self {
        match err {
            LlmServiceError::Config(e) => AppError::Config(e),
            LlmServiceError::Provider(ProviderError::HttpStatus { status, body, .. }) => {
                AppError::Upstream { status, body }
            }
            other => AppError::Unexpected(other.to_string()),
        }
    }
}
