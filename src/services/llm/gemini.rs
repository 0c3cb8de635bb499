// src/services/llm/gemini.rs
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{TextGenerator, send_for_json};
use crate::error::UpstreamError;

pub const GEMINI_MODEL: &str = "gemini-pro";
pub const GEMINI_FALLBACK: &str = "No response from Gemini.";

const PROVIDER: &str = "gemini";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// `candidates[0].content.parts[0].text`, if present and non-empty.
/// Only that path is inspected; the rest of the body may have any shape.
fn first_candidate_text(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Client for the Gemini `generateContent` endpoint. The key travels in the URL.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{GEMINI_MODEL}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let request = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body);

        let data = send_for_json(PROVIDER, request).await?;

        Ok(first_candidate_text(&data).unwrap_or_else(|| {
            tracing::warn!("gemini response had no candidate text, using fallback");
            GEMINI_FALLBACK.to_string()
        }))
    }
}
