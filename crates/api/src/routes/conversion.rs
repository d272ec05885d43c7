//! Amount conversion and price calculation routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use kurs_core::currency::DEFAULT_DECIMALS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error_response;
use crate::AppState;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert", get(convert))
        .route("/calculate", get(calculate))
}

/// Query parameters for converting an amount.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Amount to convert.
    pub amount: Decimal,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Decimal places of the result (at least 2 are used).
    pub decimals: Option<u32>,
}

/// Response for a conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Amount as requested.
    pub amount: Decimal,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Converted amount.
    pub result: Decimal,
}

/// Query parameters for calculating a price.
#[derive(Debug, Deserialize)]
pub struct CalculateQuery {
    /// Price in the default currency.
    pub price: Decimal,
    /// Target currency code.
    pub code: String,
    /// Decimal places of the result (at least 2 are used).
    pub decimals: Option<u32>,
}

/// Response for a price calculation.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Price in the default currency.
    pub price: Decimal,
    /// Target currency code.
    pub code: String,
    /// Price in the target currency.
    pub result: Decimal,
}

/// GET `/convert` - Convert an amount between two currencies.
async fn convert(State(state): State<AppState>, Query(query): Query<ConvertQuery>) -> Response {
    let decimals = query.decimals.unwrap_or(DEFAULT_DECIMALS);

    match state
        .converter
        .convert(query.amount, &query.from, &query.to, decimals)
        .await
    {
        Ok(result) => {
            let response = ConvertResponse {
                amount: query.amount,
                from: query.from,
                to: query.to,
                result,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}

/// GET `/calculate` - Express a default-currency price in another currency.
async fn calculate(
    State(state): State<AppState>,
    Query(query): Query<CalculateQuery>,
) -> Response {
    let decimals = query.decimals.unwrap_or(DEFAULT_DECIMALS);

    match state
        .converter
        .calculate(query.price, &query.code, decimals)
        .await
    {
        Ok(result) => {
            let response = CalculateResponse {
                price: query.price,
                code: query.code,
                result,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}
