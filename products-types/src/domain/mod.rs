//! Domain models for the products service.

pub mod exchange_rate;
pub mod product;

pub use exchange_rate::{ExchangeRate, RateTable, find_by_target};
pub use product::{ConversionResult, Product, ProductPrice};
