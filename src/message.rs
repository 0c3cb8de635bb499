// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `message` is kept as raw JSON; the handler decides what counts as missing.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
