//! Integration tests for the converter running on the currency repository.
//!
//! Uses SeaORM's mock connection; every query result is consumed in order,
//! so a test fails if the converter queries more often than expected.

use std::sync::Arc;

use kurs_core::currency::{CurrencyConverter, CurrencySources, MokaRateCache};
use kurs_db::{CurrencyRepository, entities::currencies};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, MockDatabase};

fn usd() -> currencies::Model {
    currencies::Model {
        code: "USD".to_string(),
        name: "US Dollar".to_string(),
        symbol: "$".to_string(),
        factor: Decimal::ONE,
        is_active: true,
        is_default: true,
    }
}

fn eur() -> currencies::Model {
    currencies::Model {
        code: "EUR".to_string(),
        name: "Euro".to_string(),
        symbol: "€".to_string(),
        factor: dec!(0.9),
        is_active: true,
        is_default: false,
    }
}

#[tokio::test]
async fn test_calculate_queries_store_once_per_entry() {
    // One rate table query, one default query; nothing else is mocked.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![eur(), usd()]])
        .append_query_results([vec![usd()]])
        .into_connection();
    let converter = CurrencyConverter::new(
        Arc::new(CurrencyRepository::new(db)),
        Arc::new(MokaRateCache::new()),
    );

    for _ in 0..3 {
        let price = converter.calculate(dec!(100), "EUR", 2).await.unwrap();
        assert_eq!(price.to_string(), "90.00");
    }
}

#[tokio::test]
async fn test_currency_code_falls_back_to_store_default() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![usd()]])
        .into_connection();
    let converter = CurrencyConverter::new(
        Arc::new(CurrencyRepository::new(db)),
        Arc::new(MokaRateCache::new()),
    );

    let code = converter
        .currency_code(&CurrencySources::new())
        .await
        .unwrap();
    assert_eq!(code.as_deref(), Some("USD"));
}

#[tokio::test]
async fn test_currency_code_none_without_default() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<currencies::Model>::new()])
        .into_connection();
    let converter = CurrencyConverter::new(
        Arc::new(CurrencyRepository::new(db)),
        Arc::new(MokaRateCache::new()),
    );

    let code = converter
        .currency_code(&CurrencySources::new())
        .await
        .unwrap();
    assert_eq!(code, None);
}
