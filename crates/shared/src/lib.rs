//! Shared configuration and errors for Kurs.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, CurrencyConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, AppResult};
