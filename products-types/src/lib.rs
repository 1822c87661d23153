//! # Products Types
//!
//! Domain types and port traits for the products service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ExchangeRate, Product, ConversionResult)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Source, repository and application error types

pub mod constants;
pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use constants::{BASE_CURRENCY, CURRENCY_EXCHANGE_KEY};
pub use domain::{ConversionResult, ExchangeRate, Product, ProductPrice, RateTable};
pub use dto::*;
pub use error::{AppError, RateSourceError, RepoError};
pub use ports::{ExchangeRateSource, ProductRepository, RateCache};
