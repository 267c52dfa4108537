mod config;
mod errors;
mod models;
mod routes;
mod search;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::source::{CandidateSource, FileSource, HttpSource};
use crate::store::CandidateStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ProfessionHall API v{}", env!("CARGO_PKG_VERSION"));

    // Load the record store once; a bad fixture degrades to an empty store
    let source: Box<dyn CandidateSource> = match &config.candidates_url {
        Some(url) => Box::new(HttpSource::new(url.clone())?),
        None => Box::new(FileSource::new(&config.candidates_path)),
    };
    let store = CandidateStore::load(source.as_ref(), config.result_order).await;
    info!("Page size: {}", config.page_size);

    let state = AppState {
        store: Arc::new(store),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
