//! Currencies schema migration runner.
//!
//! Reads `DATABASE_URL` and accepts the standard sea-orm-migration commands:
//!   migrator up      - Create the currencies table
//!   migrator down    - Drop it again
//!   migrator status  - Show which migrations ran
//!   migrator fresh   - Drop everything and migrate from scratch

use kurs_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The migrator CLI installs its own tracing subscriber.
    cli::run_cli(Migrator).await;
}
