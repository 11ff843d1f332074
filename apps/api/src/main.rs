mod accounts;
mod assistant;
mod campaigns;
mod config;
mod errors;
mod extraction;
mod insights;
mod llm_client;
mod models;
mod recommendations;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::insights::geolocation::Geocoder;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{KeyValueStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MarketPulse API v{}", env!("CARGO_PKG_VERSION"));

    // Session store: Redis when configured, otherwise process memory
    let store: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisStore::open(url)?),
        None => {
            warn!("REDIS_URL not set, sessions are kept in memory");
            Arc::new(MemoryStore::default())
        }
    };

    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_api_url,
        &config.gemini_model,
    )?;
    info!("Completion client initialized ({})", llm.endpoint());

    let geocoder = Geocoder::new(config.opencage_api_key.clone(), &config.opencage_api_url)?;
    if config.opencage_api_key.is_none() {
        warn!("OPENCAGE_API_KEY not set, geolocation is unavailable");
    }

    let state = AppState {
        llm,
        geocoder,
        store,
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
