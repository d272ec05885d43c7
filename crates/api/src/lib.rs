//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Currency listing and current currency resolution
//! - Amount conversion and price calculation
//! - Health checks

pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use kurs_core::currency::CurrencyConverter;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached currency converter.
    pub converter: Arc<CurrencyConverter>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
