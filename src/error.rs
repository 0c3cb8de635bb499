// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::message::ErrorResponse;

/// Failure talking to one of the upstream model providers.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned a body that is not JSON: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Message required")]
    MessageRequired,

    #[error("message is not text: {0}")]
    MessageNotText(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::MessageRequired => (StatusCode::BAD_REQUEST, "Message required"),
            AppError::MessageNotText(_) | AppError::Upstream(_) => {
                tracing::error!(error = %self, "chat request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
