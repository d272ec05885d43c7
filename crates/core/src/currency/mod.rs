//! Multi-currency handling backed by cached conversion factors.

pub mod cache;
pub mod error;
pub mod resolver;
pub mod rounding;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod props;

pub use cache::{CacheEntry, MokaRateCache, RateCache};
pub use error::CurrencyError;
pub use resolver::CurrencySources;
pub use rounding::{DEFAULT_DECIMALS, price_rounding};
pub use service::CurrencyConverter;
pub use store::{CurrencyStore, InMemoryCurrencyStore};
pub use types::{Currency, RateTable};
