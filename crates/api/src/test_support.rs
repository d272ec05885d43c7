//! Router fixtures for route tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::COOKIE},
};
use http_body_util::BodyExt;
use kurs_core::currency::{
    Currency, CurrencyConverter, CurrencyError, CurrencyStore, InMemoryCurrencyStore,
    MokaRateCache,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Store whose every query fails.
struct FailingStore;

#[async_trait]
impl CurrencyStore for FailingStore {
    async fn active_currencies(&self) -> Result<Vec<Currency>, CurrencyError> {
        Err(CurrencyError::Store("connection refused".to_string()))
    }

    async fn active_default(&self) -> Result<Option<Currency>, CurrencyError> {
        Err(CurrencyError::Store("connection refused".to_string()))
    }
}

pub fn sample_currencies() -> Vec<Currency> {
    vec![
        Currency::new("USD", Decimal::ONE)
            .as_default()
            .with_display("US Dollar", "$"),
        Currency::new("EUR", dec!(0.9)).with_display("Euro", "€"),
        Currency::new("JPY", dec!(151.337)).with_display("Japanese Yen", "¥"),
    ]
}

pub fn router_with(currencies: Vec<Currency>) -> Router {
    router_for(Arc::new(InMemoryCurrencyStore::new(currencies)))
}

pub fn sample_router() -> Router {
    router_with(sample_currencies())
}

pub fn failing_router() -> Router {
    router_for(Arc::new(FailingStore))
}

fn router_for(store: Arc<dyn CurrencyStore>) -> Router {
    let converter = CurrencyConverter::new(store, Arc::new(MokaRateCache::new()));
    create_router(AppState {
        converter: Arc::new(converter),
    })
}

/// Sends a GET request and returns the status with the JSON body.
pub async fn get(router: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }

    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}
