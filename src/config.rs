// src/config.rs
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PERPLEXITY_API_URL: &str = "https://api.perplexity.ai";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub perplexity_api_key: String,
    pub perplexity_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            gemini_api_key: lookup("GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            perplexity_api_key: lookup("PERPLEXITY_API_KEY").unwrap_or_default(),
            perplexity_api_url: lookup("PERPLEXITY_API_URL")
                .unwrap_or_else(|| DEFAULT_PERPLEXITY_API_URL.to_string()),
        }
    }
}
