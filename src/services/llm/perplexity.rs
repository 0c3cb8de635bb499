// src/services/llm/perplexity.rs
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{WebSearcher, send_for_json};
use crate::error::UpstreamError;

pub const PERPLEXITY_MODEL: &str = "pplx-70b-online";
pub const PERPLEXITY_FALLBACK: &str = "No response from Perplexity.";

const PROVIDER: &str = "perplexity";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

fn first_choice_content(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

pub struct PerplexityClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl PerplexityClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WebSearcher for PerplexityClient {
    async fn search(&self, query: &str) -> Result<String, UpstreamError> {
        let body = ChatCompletionRequest {
            model: PERPLEXITY_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: query,
            }],
        };

        let request = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&body);

        let data = send_for_json(PROVIDER, request).await?;

        Ok(first_choice_content(&data).unwrap_or_else(|| {
            tracing::warn!("perplexity response had no choice content, using fallback");
            PERPLEXITY_FALLBACK.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn reads_only_the_first_choice() {
        let body = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": null},
                "garbage"
            ]
        });
        assert_eq!(first_choice_content(&body).as_deref(), Some("first"));
        assert_eq!(first_choice_content(&json!({"choices": [{"message": {}}]})), None);
        assert_eq!(first_choice_content(&json!({"choices": {"0": "x"}})), None);
        assert_eq!(first_choice_content(&json!([])), None);
    }

    #[tokio::test]
    async fn sends_online_model_with_bearer_token() {
        let server = MockServer::start().await;

        let response_body = json!({
            "id": "cmpl-1",
            "model": "pplx-70b-online",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Results are out on Friday."},
                "finish_reason": "stop"
            }]
        });

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "model": "pplx-70b-online",
                "messages": [{"role": "user", "content": "today's exam result"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = PerplexityClient::new("test-key".into(), server.uri());
        let answer = client.search("today's exam result").await.unwrap();

        assert_eq!(answer, "Results are out on Friday.");
    }

    #[tokio::test]
    async fn empty_choices_fall_back() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = PerplexityClient::new("test-key".into(), server.uri());
        let answer = client.search("latest news").await.unwrap();

        assert_eq!(answer, PERPLEXITY_FALLBACK);
    }

    #[tokio::test]
    async fn unauthorized_error_body_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "Invalid API key"}})),
            )
            .mount(&server)
            .await;

        let client = PerplexityClient::new(String::new(), server.uri());
        let answer = client.search("latest news").await.unwrap();

        assert_eq!(answer, PERPLEXITY_FALLBACK);
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("upstream timeout"))
            .mount(&server)
            .await;

        let client = PerplexityClient::new("test-key".into(), server.uri());
        let err = client.search("news").await.unwrap_err();

        assert!(matches!(err, UpstreamError::Decode { provider: "perplexity", .. }));
    }
}
