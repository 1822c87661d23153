//! Exchange rate adapters.
//!
//! Implements the two exchange ports from `products-types`:
//! - [`ConfigRateSource`] / [`StaticRateSource`] for `ExchangeRateSource`
//! - [`MemoryRateCache`] for `RateCache`
//!
//! # Example
//! ```
//! use exchange_rates::{MemoryRateCache, StaticRateSource};
//! use products_types::{ExchangeRateSource, RateCache};
//!
//! let source = StaticRateSource::new(Vec::new());
//! let cache = MemoryRateCache::new();
//! assert!(cache.get().is_none());
//!
//! cache.set(source.get_rates().unwrap());
//! assert_eq!(cache.get().unwrap().len(), 0);
//! ```

mod cache;
mod source;

pub use cache::MemoryRateCache;
pub use source::{ConfigRateSource, StaticRateSource, parse_settings};
