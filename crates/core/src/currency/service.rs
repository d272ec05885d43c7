//! Currency converter for cached factor lookup, conversion and calculation.
//!
//! Factors are read from a cached rate table that is rebuilt from the store
//! on a miss. A code that is missing from a freshly read table deletes the
//! table so the next lookup sees the store's current state.

use std::sync::Arc;
use std::time::Duration;

use kurs_shared::CurrencyConfig;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::cache::{CacheEntry, DEFAULT_CURRENCY_KEY, RATES_KEY, RateCache};
use super::error::CurrencyError;
use super::rounding::price_rounding;
use super::store::CurrencyStore;
use super::types::{Currency, RateTable};

/// Default time-to-live for cache entries (1 minute).
const DEFAULT_TTL_SECS: u64 = 60;

/// Default key under which the preferred currency is kept in sessions and cookies.
const DEFAULT_SESSION_KEY: &str = "currency";

/// Converts amounts between currencies using cached factors.
///
/// Cheap to share behind an `Arc`; holds no locks of its own.
pub struct CurrencyConverter {
    store: Arc<dyn CurrencyStore>,
    cache: Arc<dyn RateCache>,
    ttl: Duration,
    session_key: String,
}

impl CurrencyConverter {
    /// Creates a converter with a 60 second cache TTL and the `currency` session key.
    #[must_use]
    pub fn new(store: Arc<dyn CurrencyStore>, cache: Arc<dyn RateCache>) -> Self {
        Self {
            store,
            cache,
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }

    /// Creates a converter using the TTL and session key from configuration.
    #[must_use]
    pub fn from_config(
        store: Arc<dyn CurrencyStore>,
        cache: Arc<dyn RateCache>,
        config: &CurrencyConfig,
    ) -> Self {
        Self::new(store, cache)
            .with_ttl(config.cache_ttl())
            .with_session_key(config.session_key.clone())
    }

    /// Sets the time-to-live of cached entries.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the session/cookie key holding the preferred currency code.
    #[must_use]
    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = session_key.into();
        self
    }

    /// Returns the session/cookie key holding the preferred currency code.
    #[must_use]
    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    /// Lists the active currencies straight from the store.
    pub async fn active_currencies(&self) -> Result<Vec<Currency>, CurrencyError> {
        self.store.active_currencies().await
    }

    /// Looks up the factor for `code` in the cached rate table.
    ///
    /// Returns `Ok(None)` when the code is not in the table. The table is
    /// deleted from the cache in that case, so a code that really does not
    /// exist triggers a rebuild on every lookup.
    pub async fn factor_by_code(&self, code: &str) -> Result<Option<Decimal>, CurrencyError> {
        let factor = self.lookup_rate(code).await?;

        if factor.is_none() {
            warn!(code, "Currency code missing from rate table, invalidating cache");
            self.cache.delete(RATES_KEY);
        }

        Ok(factor)
    }

    /// Returns the active default currency, caching it for the TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::DefaultCurrencyNotFound`] if the store has
    /// no active default currency.
    pub async fn default_currency(&self) -> Result<Currency, CurrencyError> {
        if let Some(entry) = self.cache.get(DEFAULT_CURRENCY_KEY)
            && let CacheEntry::DefaultCurrency(currency) = entry.as_ref()
        {
            return Ok(currency.clone());
        }

        let currency = self
            .store
            .active_default()
            .await?
            .ok_or(CurrencyError::DefaultCurrencyNotFound)?;

        debug!(code = %currency.code, "Cached default currency");
        self.cache.set(
            DEFAULT_CURRENCY_KEY,
            CacheEntry::DefaultCurrency(currency.clone()),
            self.ttl,
        );

        Ok(currency)
    }

    /// Converts a price expressed in the default currency into `code`.
    ///
    /// Computes `(price / default_factor) * factor(code)` and rounds it
    /// with [`price_rounding`].
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use rust_decimal::Decimal;
    /// # use rust_decimal_macros::dec;
    /// # use kurs_core::currency::{Currency, CurrencyConverter, InMemoryCurrencyStore, MokaRateCache};
    /// # tokio_test_block_on(async {
    /// let store = InMemoryCurrencyStore::new(vec![
    ///     Currency::new("USD", Decimal::ONE).as_default(),
    ///     Currency::new("EUR", dec!(0.9)),
    /// ]);
    /// let converter = CurrencyConverter::new(Arc::new(store), Arc::new(MokaRateCache::new()));
    ///
    /// let price = converter.calculate(dec!(100), "EUR", 2).await.unwrap();
    /// assert_eq!(price.to_string(), "90.00");
    /// # });
    /// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
    /// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::UnknownCurrencyCode`] if `code` is not an active currency
    /// - [`CurrencyError::DefaultCurrencyNotFound`] if there is no default currency
    /// - [`CurrencyError::InvalidFactor`] if a factor is zero or negative
    /// - [`CurrencyError::Overflow`] if the arithmetic leaves the decimal range
    /// - [`CurrencyError::PrecisionOutOfRange`] if the result cannot carry `decimals` places
    pub async fn calculate(
        &self,
        price: Decimal,
        code: &str,
        decimals: u32,
    ) -> Result<Decimal, CurrencyError> {
        let to = self.factor_by_code(code).await?;
        let default = self.default_currency().await?;

        let to = positive_factor(code, to)?;
        let default_factor = positive_factor(&default.code, Some(default.factor))?;

        // Out of the default currency into the base, then into the target.
        let converted = price
            .checked_div(default_factor)
            .and_then(|base| base.checked_mul(to))
            .ok_or(CurrencyError::Overflow)?;

        price_rounding(converted, decimals)
    }

    /// Converts `amount` from one currency into another.
    ///
    /// Identical codes return `amount` untouched, without rounding.
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::UnknownCurrencyCode`] if either code is not an active currency
    /// - [`CurrencyError::InvalidFactor`] if a factor is zero or negative
    /// - [`CurrencyError::Overflow`] if the arithmetic leaves the decimal range
    /// - [`CurrencyError::PrecisionOutOfRange`] if the result cannot carry `decimals` places
    pub async fn convert(
        &self,
        amount: Decimal,
        from_code: &str,
        to_code: &str,
        decimals: u32,
    ) -> Result<Decimal, CurrencyError> {
        if from_code == to_code {
            return Ok(amount);
        }

        let from = self.factor_by_code(from_code).await?;
        let to = self.factor_by_code(to_code).await?;

        let from = positive_factor(from_code, from)?;
        let to = positive_factor(to_code, to)?;

        let converted = to
            .checked_div(from)
            .and_then(|rate| amount.checked_mul(rate))
            .ok_or(CurrencyError::Overflow)?;

        price_rounding(converted, decimals)
    }

    async fn lookup_rate(&self, code: &str) -> Result<Option<Decimal>, CurrencyError> {
        // An empty table counts as a miss.
        if let Some(entry) = self.cache.get(RATES_KEY)
            && let CacheEntry::Rates(rates) = entry.as_ref()
            && !rates.is_empty()
        {
            return Ok(rates.get(code).copied());
        }

        let rates = self.rebuild_rates().await?;
        Ok(rates.get(code).copied())
    }

    async fn rebuild_rates(&self) -> Result<RateTable, CurrencyError> {
        let rates: RateTable = self
            .store
            .active_currencies()
            .await?
            .into_iter()
            .map(|currency| (currency.code, currency.factor))
            .collect();

        debug!(count = rates.len(), "Rebuilt currency rate table");
        self.cache
            .set(RATES_KEY, CacheEntry::Rates(rates.clone()), self.ttl);

        Ok(rates)
    }
}

fn positive_factor(code: &str, factor: Option<Decimal>) -> Result<Decimal, CurrencyError> {
    match factor {
        Some(factor) if factor > Decimal::ZERO => Ok(factor),
        Some(_) => Err(CurrencyError::InvalidFactor {
            code: code.to_string(),
        }),
        None => Err(CurrencyError::UnknownCurrencyCode(code.to_string())),
    }
}
