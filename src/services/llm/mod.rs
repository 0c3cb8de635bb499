// src/services/llm/mod.rs
pub mod gemini;
pub mod perplexity;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::UpstreamError;

/// General-purpose model: prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

/// Web-search-augmented model: query in, grounded answer out.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, UpstreamError>;
}

/// Send a prepared request and decode the body as JSON.
///
/// The HTTP status is only logged. Error bodies are still JSON and are
/// handed back so the caller can fall back on the missing fields.
pub(crate) async fn send_for_json(
    provider: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<Value, UpstreamError> {
    let resp = request
        .send()
        .await
        .map_err(|source| UpstreamError::Transport { provider, source })?;

    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(provider, %status, "upstream returned non-success status");
    }

    resp.json::<Value>().await.map_err(|source| {
        if source.is_decode() {
            UpstreamError::Decode { provider, source }
        } else {
            UpstreamError::Transport { provider, source }
        }
    })
}
