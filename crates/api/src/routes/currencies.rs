//! Currency listing and current currency routes.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::CookieJar;
use kurs_core::currency::{Currency, CurrencySources};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error_response;
use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/current", get(current_currency))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code.
    pub code: String,
    /// Currency name.
    pub name: String,
    /// Currency symbol.
    pub symbol: String,
    /// Factor relative to the base currency.
    pub factor: Decimal,
    /// Whether this is the default currency.
    pub is_default: bool,
}

impl From<Currency> for CurrencyResponse {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency.code,
            name: currency.name,
            symbol: currency.symbol,
            factor: currency.factor,
            is_default: currency.is_default,
        }
    }
}

/// Response for the currency listing.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Active currencies.
    pub currencies: Vec<CurrencyResponse>,
    /// Currency code resolved for this request.
    pub current: Option<String>,
}

/// Response for the current currency.
#[derive(Debug, Serialize)]
pub struct CurrentCurrencyResponse {
    /// Currency code resolved for this request, `null` when none could be determined.
    pub code: Option<String>,
}

fn cookie_values(jar: &CookieJar) -> HashMap<String, String> {
    jar.iter()
        .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
        .collect()
}

/// GET `/currencies` - List active currencies and the request's currency.
async fn list_currencies(State(state): State<AppState>, jar: CookieJar) -> Response {
    let currencies = match state.converter.active_currencies().await {
        Ok(currencies) => currencies,
        Err(e) => return error_response(e.into()),
    };

    let cookies = cookie_values(&jar);
    let sources = CurrencySources::new().with_cookies(&cookies);
    let current = match state.converter.currency_code(&sources).await {
        Ok(code) => code,
        Err(e) => return error_response(e.into()),
    };

    let response = CurrencyListResponse {
        currencies: currencies.into_iter().map(CurrencyResponse::from).collect(),
        current,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET `/currencies/current` - Resolve the request's currency code.
async fn current_currency(State(state): State<AppState>, jar: CookieJar) -> Response {
    let cookies = cookie_values(&jar);
    let sources = CurrencySources::new().with_cookies(&cookies);

    match state.converter.currency_code(&sources).await {
        Ok(code) => (StatusCode::OK, Json(CurrentCurrencyResponse { code })).into_response(),
        Err(e) => error_response(e.into()),
    }
}
