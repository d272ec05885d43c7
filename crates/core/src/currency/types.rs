//! Currency types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mapping from currency code to its conversion factor.
pub type RateTable = HashMap<String, Decimal>;

/// A currency known to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code (e.g. "USD").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// Value relative to the shared base currency. Always positive.
    pub factor: Decimal,
    /// Whether the currency takes part in conversions.
    pub is_active: bool,
    /// Whether this is the pivot currency. At most one active currency is default.
    pub is_default: bool,
}

impl Currency {
    /// Creates an active, non-default currency.
    #[must_use]
    pub fn new(code: impl Into<String>, factor: Decimal) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            symbol: code.clone(),
            code,
            factor,
            is_active: true,
            is_default: false,
        }
    }

    /// Marks this currency as the default.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Sets the display name and symbol.
    #[must_use]
    pub fn with_display(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.name = name.into();
        self.symbol = symbol.into();
        self
    }

    /// Marks this currency as inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
