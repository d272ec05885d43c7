//! Currency error types.

use kurs_shared::AppError;
use thiserror::Error;

/// Currency-related errors.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// The code is not among the active currencies.
    #[error("Unknown currency code: {0}")]
    UnknownCurrencyCode(String),

    /// The store has no active default currency.
    #[error("No active default currency configured")]
    DefaultCurrencyNotFound,

    /// A currency carries a factor that cannot be divided by.
    #[error("Currency '{code}' has a non-positive factor")]
    InvalidFactor {
        /// Offending currency code.
        code: String,
    },

    /// The rounded value cannot carry the requested number of decimal places.
    #[error("Amount cannot be represented with {places} decimal places")]
    PrecisionOutOfRange {
        /// Decimal places that were asked for.
        places: u32,
    },

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow while converting amount")]
    Overflow,

    /// The backing store failed.
    #[error("Currency store error: {0}")]
    Store(String),
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnknownCurrencyCode(_) | CurrencyError::DefaultCurrencyNotFound => {
                Self::NotFound(err.to_string())
            }
            CurrencyError::InvalidFactor { .. } => Self::BusinessRule(err.to_string()),
            CurrencyError::PrecisionOutOfRange { .. } | CurrencyError::Overflow => {
                Self::Validation(err.to_string())
            }
            CurrencyError::Store(msg) => Self::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CurrencyError::UnknownCurrencyCode("XXX".into()), 404)]
    #[case(CurrencyError::DefaultCurrencyNotFound, 404)]
    #[case(CurrencyError::InvalidFactor { code: "EUR".into() }, 422)]
    #[case(CurrencyError::PrecisionOutOfRange { places: 28 }, 400)]
    #[case(CurrencyError::Overflow, 400)]
    #[case(CurrencyError::Store("connection refused".into()), 500)]
    fn test_maps_to_app_error(#[case] err: CurrencyError, #[case] status: u16) {
        assert_eq!(AppError::from(err).status_code(), status);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CurrencyError::UnknownCurrencyCode("XXX".into()).to_string(),
            "Unknown currency code: XXX"
        );
        assert_eq!(
            AppError::from(CurrencyError::Store("boom".into())).to_string(),
            "Database error: boom"
        );
    }
}
