//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status: "healthy", or "degraded" without a default currency.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Code of the default currency, if one is configured.
    pub default_currency: Option<String>,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let default_currency = match state.converter.default_currency().await {
        Ok(currency) => Some(currency.code),
        Err(e) => {
            warn!(error = %e, "Health check could not resolve default currency");
            None
        }
    };

    Json(HealthResponse {
        status: if default_currency.is_some() {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        default_currency,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rust_decimal_macros::dec;

    use crate::test_support::{failing_router, get, router_with, sample_router};
    use kurs_core::currency::Currency;

    #[tokio::test]
    async fn test_healthy_with_default() {
        let (status, body) = get(sample_router(), "/api/v1/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["default_currency"], "USD");
    }

    #[tokio::test]
    async fn test_degraded_without_default() {
        let router = router_with(vec![Currency::new("EUR", dec!(0.9))]);
        let (status, body) = get(router, "/api/v1/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert!(body["default_currency"].is_null());
    }

    #[tokio::test]
    async fn test_degraded_when_store_fails() {
        let (_, body) = get(failing_router(), "/api/v1/health", None).await;
        assert_eq!(body["status"], "degraded");
    }
}
