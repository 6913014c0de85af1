use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when ANTHROPIC_API_KEY was absent at startup. Handlers that
    /// need the model turn this into a 500 per request.
    pub llm: Option<LlmClient>,
    #[allow(dead_code)]
    pub config: Config,
}
