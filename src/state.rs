// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::chatbot::Chatbot;
use crate::services::llm::gemini::GeminiClient;
use crate::services::llm::perplexity::PerplexityClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chatbot: Chatbot,
}

impl AppState {
    pub fn new(chatbot: Chatbot) -> Self {
        Self { chatbot }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let gemini = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_api_url.clone(),
        );
        let perplexity = PerplexityClient::new(
            config.perplexity_api_key.clone(),
            config.perplexity_api_url.clone(),
        );
        Self::new(Chatbot::new(Arc::new(gemini), Arc::new(perplexity)))
    }
}
