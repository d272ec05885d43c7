//! Resolution of a request's preferred currency code.

use std::collections::HashMap;

use tracing::debug;

use super::error::CurrencyError;
use super::service::CurrencyConverter;

/// Where a request may carry its preferred currency.
///
/// Callers build this from whatever request type they have; the converter
/// never touches the request itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrencySources<'a> {
    /// Session values, checked first.
    pub session: Option<&'a HashMap<String, String>>,
    /// Cookie values, checked second.
    pub cookies: Option<&'a HashMap<String, String>>,
}

impl<'a> CurrencySources<'a> {
    /// Creates empty sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session values.
    #[must_use]
    pub const fn with_session(mut self, session: &'a HashMap<String, String>) -> Self {
        self.session = Some(session);
        self
    }

    /// Sets the cookie values.
    #[must_use]
    pub const fn with_cookies(mut self, cookies: &'a HashMap<String, String>) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Returns the first value stored under `key`, session before cookies.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        [self.session, self.cookies]
            .into_iter()
            .flatten()
            .find_map(|values| values.get(key))
            .map(String::as_str)
    }
}

impl CurrencyConverter {
    /// Resolves the currency code for a request.
    ///
    /// Checks the session, then the cookies, then falls back to the code of
    /// the default currency. Returns `Ok(None)` when there is no default
    /// currency either.
    ///
    /// # Errors
    ///
    /// Store failures other than a missing default currency.
    pub async fn currency_code(
        &self,
        sources: &CurrencySources<'_>,
    ) -> Result<Option<String>, CurrencyError> {
        if let Some(code) = sources.lookup(self.session_key()) {
            return Ok(Some(code.to_string()));
        }

        match self.default_currency().await {
            Ok(currency) => Ok(Some(currency.code)),
            Err(CurrencyError::DefaultCurrencyNotFound) => {
                debug!("No currency in request and no default currency configured");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
