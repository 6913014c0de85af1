//! HTTP client for the evaluation endpoint.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::Evaluation;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Error body shape used by the API: `{ "error": string }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submits a prompt for evaluation. Non-2xx responses surface the
    /// server's `error` message when the body carries one.
    pub async fn evaluate(&self, prompt: &str) -> Result<Evaluation, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/evaluate", self.base_url))
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| "Failed to evaluate prompt".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn api_error_displays_server_message() {
        let err = ClientError::Api {
            status: 500,
            message: "API key not configured".to_string(),
        };
        assert_eq!(err.to_string(), "API key not configured");
    }
}
