//! Currency repository backing the converter's store.

use async_trait::async_trait;
use kurs_core::currency::{Currency, CurrencyError, CurrencyStore};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::entities::currencies;

impl From<currencies::Model> for Currency {
    fn from(model: currencies::Model) -> Self {
        Self {
            code: model.code,
            name: model.name,
            symbol: model.symbol,
            factor: model.factor,
            is_active: model.is_active,
            is_default: model.is_default,
        }
    }
}

/// Currency repository for read access to the currencies table.
#[derive(Debug)]
pub struct CurrencyRepository {
    db: DatabaseConnection,
}

impl CurrencyRepository {
    /// Creates a new currency repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active currencies ordered by code.
    pub async fn find_active(&self) -> Result<Vec<currencies::Model>, DbErr> {
        currencies::Entity::find()
            .filter(currencies::Column::IsActive.eq(true))
            .order_by_asc(currencies::Column::Code)
            .all(&self.db)
            .await
    }

    /// Finds the active default currency.
    pub async fn find_active_default(&self) -> Result<Option<currencies::Model>, DbErr> {
        currencies::Entity::find()
            .filter(currencies::Column::IsActive.eq(true))
            .filter(currencies::Column::IsDefault.eq(true))
            .one(&self.db)
            .await
    }
}

fn store_error(err: DbErr) -> CurrencyError {
    error!(error = %err, "Currency store query failed");
    CurrencyError::Store(err.to_string())
}

#[async_trait]
impl CurrencyStore for CurrencyRepository {
    async fn active_currencies(&self) -> Result<Vec<Currency>, CurrencyError> {
        let rows = self.find_active().await.map_err(store_error)?;
        Ok(rows.into_iter().map(Currency::from).collect())
    }

    async fn active_default(&self) -> Result<Option<Currency>, CurrencyError> {
        let row = self.find_active_default().await.map_err(store_error)?;
        Ok(row.map(Currency::from))
    }
}
