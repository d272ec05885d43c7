//! Core business logic for Kurs.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The persistence store and the cache are reached through the traits in
//! [`currency::store`] and [`currency::cache`].
//!
//! # Modules
//!
//! - `currency` - Cached factor lookup, conversion, rounding and currency code resolution

pub mod currency;
