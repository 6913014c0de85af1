use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire shape is a flat `{ "error": string }` body; clients render the
/// message as-is.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("API key not configured")]
    ApiKeyMissing,

    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Failed to parse evaluation response")]
    UnparsableReply(#[source] ExtractError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ApiKeyMissing => {
                tracing::error!("evaluate called without ANTHROPIC_API_KEY configured");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                // The upstream failure message is part of the contract: the
                // user sees it and decides whether to resubmit.
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::UnparsableReply(cause) => {
                tracing::error!("unparsable model reply: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    use crate::evaluate::extract::extract_json;

    async fn response_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unparsable_reply_is_500_with_generic_message() {
        let cause = extract_json("Sorry, no JSON for you.").unwrap_err();
        let (status, body) = response_parts(AppError::UnparsableReply(cause)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to parse evaluation response");
    }

    #[tokio::test]
    async fn llm_error_propagates_upstream_message() {
        let err = AppError::Llm(LlmError::Api {
            status: 529,
            message: "overloaded".to_string(),
        });
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "API error (status 529): overloaded");
    }

    #[tokio::test]
    async fn validation_is_400_with_its_message() {
        let err = AppError::Validation("Invalid prompt provided".to_string());
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid prompt provided");
    }

    #[tokio::test]
    async fn missing_api_key_is_500_with_fixed_message() {
        let (status, body) = response_parts(AppError::ApiKeyMissing).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "API key not configured");
    }
}
