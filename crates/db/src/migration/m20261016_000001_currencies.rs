//! Currencies migration.
//!
//! Creates the currencies table holding conversion factors and the default flag.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(CURRENCIES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS currencies CASCADE;")
            .await?;
        Ok(())
    }
}

const CURRENCIES_SQL: &str = r"
CREATE TABLE currencies (
    code CHAR(3) PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    symbol VARCHAR(10) NOT NULL,
    factor NUMERIC(19, 10) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    is_default BOOLEAN NOT NULL DEFAULT false,
    CONSTRAINT chk_currency_code CHECK (code ~ '^[A-Z]{3}$'),
    CONSTRAINT chk_factor_positive CHECK (factor > 0)
);

-- At most one active default currency
CREATE UNIQUE INDEX uq_currencies_active_default ON currencies(is_default)
    WHERE is_active AND is_default;

-- Rate table rebuilds read every active currency
CREATE INDEX idx_currencies_active ON currencies(code) WHERE is_active;
";
