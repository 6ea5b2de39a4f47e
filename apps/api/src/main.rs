mod activity;
mod config;
mod db;
mod errors;
mod fallback;
mod listings;
mod llm_client;
mod matching;
mod models;
mod profiles;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_fixtures;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::ranking::LlmRankingScorer;
use crate::matching::recommender::Recommender;
use crate::matching::MatchScorer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InternMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL; one store backs every store seam
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgStore::new(db));

    // Initialize the ranking-service client when a key is configured
    let llm = match config.llm_settings() {
        Some(settings) => {
            let client = LlmClient::new(settings)?;
            info!("Ranking service client initialized (model: {})", client.model());
            Some(client)
        }
        None => {
            info!("OPENAI_API_KEY not set; matching uses the heuristic scorer only");
            None
        }
    };

    let recommender = match &llm {
        Some(client) => {
            let scorer: Arc<dyn MatchScorer> = Arc::new(LlmRankingScorer::new(client.clone()));
            Recommender::new(Some(scorer))
        }
        None => Recommender::heuristic_only(),
    };

    // Build app state
    let state = AppState {
        listings: store.clone(),
        profiles: store.clone(),
        applications: store.clone(),
        saved: store.clone(),
        notifications: store,
        recommender,
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the portal domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
