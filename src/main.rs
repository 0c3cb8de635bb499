// src/main.rs
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use stuni_backend::config::AppConfig;
use stuni_backend::routes;
use stuni_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set");
    }
    if config.perplexity_api_key.is_empty() {
        tracing::warn!("PERPLEXITY_API_KEY is not set");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = routes::create_router().with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Stuni backend running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
