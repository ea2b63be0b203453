mod bot;
mod config;
mod domain;
mod services;
mod state;
mod time_utils;
mod web;

use crate::state::SharedState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    if config.telegram.is_none() {
        tracing::warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID missing, reports will not be delivered");
    }

    let addr = config.bind_addr.clone();
    let shared: SharedState = Arc::new(state::AppState::new(config));

    let app = web::routes(shared).layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
