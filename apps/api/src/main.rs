mod config;
mod enhance;
mod errors;
mod extract;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::enhancer::TemplateEnhancer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let store = ResumeStore::new(config.saves_dir.clone());
    info!("Resume store at {}", store.dir().display());

    match &config.cors.allowed_origins {
        Some(origins) => info!("CORS restricted to {origins:?}"),
        None => info!(
            credentials = config.cors.allow_credentials,
            "CORS allows any origin"
        ),
    }

    let state = AppState {
        config: config.clone(),
        enhancer: Arc::new(TemplateEnhancer),
        store,
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
