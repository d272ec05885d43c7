//! `SeaORM` entities.

pub mod currencies;
