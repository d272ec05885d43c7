//! Property-based tests for currency operations.
//!
//! - Rounding never goes below the input and stays within one unit
//! - Converting into the same currency is the identity
//! - A conversion round trip is close to, never equal by contract to, the input

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::cache::MokaRateCache;
use super::rounding::price_rounding;
use super::service::CurrencyConverter;
use super::store::InMemoryCurrencyStore;
use super::types::Currency;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive prices with up to 6 decimal places.
fn positive_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000i64, 0u32..=6).prop_map(|(v, scale)| Decimal::new(v, scale))
}

/// Strategy to generate positive factors (0.0001 to 100.0000).
fn positive_factor() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate multipliers of at least one (1.0000 to 1000.0000).
fn multiplier() -> impl Strategy<Value = Decimal> {
    (10_000i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate requested decimal places (0 to 6).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=6
}

fn converter(from_factor: Decimal, to_factor: Decimal) -> CurrencyConverter {
    let store = InMemoryCurrencyStore::new(vec![
        Currency::new("AAA", from_factor).as_default(),
        Currency::new("BBB", to_factor),
    ]);
    CurrencyConverter::new(Arc::new(store), Arc::new(MokaRateCache::new()))
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rounding lands on or above the input, less than one unit away,
    /// with exactly `max(decimals, 2)` places.
    #[test]
    fn prop_rounding_is_ceiling(
        price in positive_price(),
        decimals in decimal_places(),
    ) {
        let places = decimals.max(2);
        let unit = Decimal::new(1, places);
        let rounded = price_rounding(price, decimals).unwrap();

        prop_assert!(rounded >= price, "{} rounded down to {}", price, rounded);
        prop_assert!(rounded - price < unit, "{} rounded too far to {}", price, rounded);
        prop_assert_eq!(rounded.scale(), places);
    }

    /// Rounding an already rounded value changes nothing.
    #[test]
    fn prop_rounding_is_idempotent(
        price in positive_price(),
        decimals in decimal_places(),
    ) {
        let once = price_rounding(price, decimals).unwrap();
        prop_assert_eq!(price_rounding(once, decimals).unwrap(), once);
    }

    /// Same-currency conversion returns the amount untouched.
    #[test]
    fn prop_convert_same_currency_is_identity(
        amount in positive_price(),
        factor in positive_factor(),
        decimals in decimal_places(),
    ) {
        let converter = converter(factor, factor);
        let result = block_on(converter.convert(amount, "BBB", "BBB", decimals)).unwrap();
        prop_assert_eq!(result.to_string(), amount.to_string());
    }

    /// Converting into a currency with a larger factor and back ends within
    /// one cent of the original amount, never below it.
    #[test]
    fn prop_round_trip_within_one_unit(
        amount in positive_amount(),
        from_factor in positive_factor(),
        k in multiplier(),
        decimals in 0u32..=2,
    ) {
        let converter = converter(from_factor, from_factor * k);

        let there = block_on(converter.convert(amount, "AAA", "BBB", decimals)).unwrap();
        let back = block_on(converter.convert(there, "BBB", "AAA", decimals)).unwrap();

        prop_assert!(back >= amount, "{} came back as {}", amount, back);
        prop_assert!(
            back - amount <= Decimal::new(1, 2),
            "{} came back as {}",
            amount,
            back
        );
    }
}
