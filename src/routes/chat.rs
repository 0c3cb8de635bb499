// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload {
        Ok(Json(request)) => message_text(request.message)?,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable chat request body");
            return Err(AppError::MessageRequired);
        }
    };

    let reply = state.chatbot.answer(&message).await?;

    Ok(Json(ChatResponse { reply }))
}

/// Falsy values (absent, null, false, 0, "") are a missing message.
/// Any other non-string value is a server-side failure.
fn message_text(message: Option<Value>) -> Result<String, AppError> {
    match message {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(AppError::MessageRequired),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(AppError::MessageRequired),
        Some(Value::String(s)) if s.is_empty() => Err(AppError::MessageRequired),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(AppError::MessageNotText(other.to_string())),
    }
}
