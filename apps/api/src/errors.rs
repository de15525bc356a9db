use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing body, missing field, or a field that is empty after trimming.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("AI not initialized. Call /api/ai/initialize first")]
    NotInitialized,

    /// A credential the endpoint needs was never configured.
    #[error("{0}")]
    ConfigurationMissing(String),

    /// The LLM or notification service failed; the message already names the source.
    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::NotInitialized => StatusCode::BAD_REQUEST,
            AppError::ConfigurationMissing(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::NotInitialized => "NOT_INITIALIZED",
            AppError::ConfigurationMissing(_) => "CONFIGURATION_MISSING",
            AppError::Upstream(_) => "UPSTREAM_FAILURE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::InvalidRequest(msg) => tracing::debug!("Rejected request: {msg}"),
            AppError::NotInitialized => tracing::warn!("Chat requested before initialization"),
            AppError::ConfigurationMissing(msg) => tracing::error!("Configuration error: {msg}"),
            AppError::Upstream(msg) => tracing::error!("Upstream error: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            AppError::InvalidRequest("Message is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotInitialized.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        assert_eq!(
            AppError::ConfigurationMissing("DeepSeek API key not configured".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream("Chat error: timeout".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_includes_cause_chain() {
        let cause = std::fs::read_to_string("/nonexistent/resume.txt").unwrap_err();
        let err = AppError::Internal(anyhow::Error::new(cause).context("Failed to read resume"));

        let message = err.to_string();
        assert!(message.starts_with("Internal server error: Failed to read resume: "));
        assert!(message.len() > "Internal server error: Failed to read resume: ".len());
    }

    #[test]
    fn test_upstream_message_is_embedded_verbatim() {
        let err = AppError::Upstream("Chat error: DeepSeek API error: rate limited".into());
        assert_eq!(err.to_string(), "Chat error: DeepSeek API error: rate limited");
    }
}
