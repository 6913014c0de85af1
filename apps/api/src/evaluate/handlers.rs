use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::evaluate::extract::extract_json;
use crate::evaluate::rubric::build_evaluation_prompt;
use crate::llm_client::LlmError;
use crate::state::AppState;

/// POST /api/evaluate
///
/// Body: `{ "prompt": string }`. Returns the evaluation object produced by
/// the model, unchanged and unvalidated — the rubric template is trusted to
/// enforce the shape.
///
/// The body is taken as a raw `Value` so an absent or non-string `prompt`
/// is our 400, not an extractor rejection.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("Invalid prompt provided".to_string()))?;

    let llm = state.llm.as_ref().ok_or(AppError::ApiKeyMissing)?;

    let response = llm.call(&build_evaluation_prompt(prompt)).await?;
    let reply = response.text().ok_or(AppError::Llm(LlmError::EmptyContent))?;

    let extracted = extract_json(reply).map_err(AppError::UnparsableReply)?;
    info!("evaluation parsed ({:?})", extracted.source);

    Ok(Json(extracted.value))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            llm: None,
            config: Config {
                anthropic_api_key: None,
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn post_evaluate(body: Value) -> (StatusCode, Value) {
        let app = build_router(test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/api/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, parsed)
    }

    #[tokio::test]
    async fn missing_prompt_field_is_400() {
        let (status, body) = post_evaluate(json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid prompt provided");
    }

    #[tokio::test]
    async fn non_string_prompt_is_400() {
        let (status, body) = post_evaluate(json!({ "prompt": 42 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid prompt provided");
    }

    #[tokio::test]
    async fn whitespace_prompt_is_400() {
        let (status, _) = post_evaluate(json!({ "prompt": "   \n\t " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_api_key_is_500_without_upstream_call() {
        // llm is None in test_state, so reaching the upstream is impossible;
        // the credential check must fire first.
        let (status, body) = post_evaluate(json!({ "prompt": "Summarize this text" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "API key not configured");
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let app = build_router(test_state());
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
