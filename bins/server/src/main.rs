//! Kurs API Server
//!
//! Serves currency conversion over HTTP, backed by Postgres and an
//! in-process rate cache.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kurs_api::{AppState, create_router};
use kurs_core::currency::{CurrencyConverter, MokaRateCache};
use kurs_db::{CurrencyRepository, connect};
use kurs_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kurs=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let db = connect(&config.database).await?;
    info!("Connected to database");

    let cache = MokaRateCache::with_capacity(config.currency.cache_capacity);
    let converter = CurrencyConverter::from_config(
        Arc::new(CurrencyRepository::new(db)),
        Arc::new(cache),
        &config.currency,
    );
    info!(
        session_key = %config.currency.session_key,
        cache_ttl_secs = config.currency.cache_ttl_secs,
        "Currency converter configured"
    );

    let state = AppState {
        converter: Arc::new(converter),
    };
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
