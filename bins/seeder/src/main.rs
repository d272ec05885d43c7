//! Database seeder for Kurs development and testing.
//!
//! Seeds a handful of currencies with illustrative factors relative to USD,
//! which is marked as the default. Existing rows are left untouched.
//!
//! Usage: cargo run --bin seeder

use kurs_db::entities::currencies;
use kurs_shared::AppConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

/// Demo currencies: code, name, symbol, factor, default.
const CURRENCIES: &[(&str, &str, &str, Decimal, bool)] = &[
    ("USD", "US Dollar", "$", dec!(1), true),
    ("EUR", "Euro", "€", dec!(0.9), false),
    ("GBP", "British Pound", "£", dec!(0.79), false),
    ("JPY", "Japanese Yen", "¥", dec!(151.337), false),
    ("IDR", "Indonesian Rupiah", "Rp", dec!(15650), false),
    ("SGD", "Singapore Dollar", "S$", dec!(1.34), false),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    println!("Connecting to database...");
    let db = kurs_db::connect(&config.database).await?;

    println!("Seeding currencies...");
    let inserted = seed_currencies(&db).await?;

    println!("Seeding complete! {inserted} currencies inserted.");
    Ok(())
}

/// Inserts the demo currencies that do not exist yet.
async fn seed_currencies(db: &DatabaseConnection) -> Result<usize, sea_orm::DbErr> {
    let mut inserted = 0;

    for &(code, name, symbol, factor, is_default) in CURRENCIES {
        if currencies::Entity::find_by_id(code.to_string())
            .one(db)
            .await?
            .is_some()
        {
            println!("  {code} already exists, skipping...");
            continue;
        }

        currencies::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            symbol: Set(symbol.to_string()),
            factor: Set(factor),
            is_active: Set(true),
            is_default: Set(is_default),
        }
        .insert(db)
        .await?;

        println!("  {code} inserted");
        inserted += 1;
    }

    Ok(inserted)
}
