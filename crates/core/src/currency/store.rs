//! Read access to the persistent currency store.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::error::CurrencyError;
use super::types::Currency;

/// Query interface to the source of truth for currencies.
///
/// The converter only reads from the store; writing rates is someone else's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyStore: Send + Sync {
    /// Lists every active currency.
    async fn active_currencies(&self) -> Result<Vec<Currency>, CurrencyError>;

    /// Returns the active default currency, or `None` if there is none.
    async fn active_default(&self) -> Result<Option<Currency>, CurrencyError>;
}

/// Currency store held in memory.
///
/// Used for tests and for wiring the converter without a database.
#[derive(Debug, Default)]
pub struct InMemoryCurrencyStore {
    currencies: RwLock<Vec<Currency>>,
}

impl InMemoryCurrencyStore {
    /// Creates a store holding the given currencies.
    #[must_use]
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self {
            currencies: RwLock::new(currencies),
        }
    }

    /// Inserts a currency, replacing any existing one with the same code.
    pub fn upsert(&self, currency: Currency) {
        let mut currencies = self
            .currencies
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        currencies.retain(|c| c.code != currency.code);
        currencies.push(currency);
    }

    fn snapshot(&self) -> Vec<Currency> {
        self.currencies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CurrencyStore for InMemoryCurrencyStore {
    async fn active_currencies(&self) -> Result<Vec<Currency>, CurrencyError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|c| c.is_active)
            .collect())
    }

    async fn active_default(&self) -> Result<Option<Currency>, CurrencyError> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|c| c.is_active && c.is_default))
    }
}
