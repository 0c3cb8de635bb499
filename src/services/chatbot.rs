// src/services/chatbot.rs
use std::sync::Arc;

use crate::error::UpstreamError;
use crate::services::classifier::needs_realtime;
use crate::services::llm::{TextGenerator, WebSearcher};

pub const SUMMARIZE_PREFIX: &str = "Summarize this for students: ";

/// Routes a question to the general model, or through web search first
/// when it looks like it needs live information.
#[derive(Clone)]
pub struct Chatbot {
    generator: Arc<dyn TextGenerator>,
    searcher: Arc<dyn WebSearcher>,
}

impl Chatbot {
    pub fn new(generator: Arc<dyn TextGenerator>, searcher: Arc<dyn WebSearcher>) -> Self {
        Self {
            generator,
            searcher,
        }
    }

    pub async fn answer(&self, message: &str) -> Result<String, UpstreamError> {
        if needs_realtime(message) {
            tracing::debug!("realtime question, searching the web first");
            let web_answer = self.searcher.search(message).await?;
            self.generator
                .generate(&format!("{SUMMARIZE_PREFIX}{web_answer}"))
                .await
        } else {
            tracing::debug!("static question, asking the general model");
            self.generator.generate(message).await
        }
    }
}
