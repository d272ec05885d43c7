//! Monetary rounding.
//!
//! CRITICAL: Rounding strategy for converted prices:
//! - Never fewer than 2 decimal places
//! - Always round away from zero, never half-up or half-even
//! - Result carries exactly the chosen number of decimal places, or fails

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::CurrencyError;

/// Decimal places used when a caller does not ask for a precision.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Rounding away from zero needs at least this many places.
const MIN_DECIMALS: u32 = 2;

/// Largest scale `Decimal` can represent.
const MAX_DECIMALS: u32 = 28;

/// Rounds a price up (away from zero) to `max(decimals, 2)` decimal places.
///
/// Precision above 28 is capped at 28.
///
/// ```
/// use rust_decimal_macros::dec;
/// use kurs_core::currency::price_rounding;
///
/// assert_eq!(price_rounding(dec!(1.001), 2).unwrap().to_string(), "1.01");
/// assert_eq!(price_rounding(dec!(1.005), 1).unwrap().to_string(), "1.01");
/// assert_eq!(price_rounding(dec!(1.00001), 4).unwrap().to_string(), "1.0001");
/// ```
///
/// # Errors
///
/// Returns [`CurrencyError::PrecisionOutOfRange`] when the value has too many
/// integer digits to carry that many decimal places.
pub fn price_rounding(price: Decimal, decimals: u32) -> Result<Decimal, CurrencyError> {
    let places = decimals.clamp(MIN_DECIMALS, MAX_DECIMALS);
    let mut rounded = price.round_dp_with_strategy(places, RoundingStrategy::AwayFromZero);

    // rescale silently settles for a smaller scale when the mantissa is full
    rounded.rescale(places);
    if rounded.scale() != places {
        return Err(CurrencyError::PrecisionOutOfRange { places });
    }

    Ok(rounded)
}
