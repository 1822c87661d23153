//! Exchange rate records as bound from the `CurrencyExchange` configuration section.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single conversion rate: one unit of `from_currency` buys `rate` units of `to_currency`.
///
/// Rates are read in batches and never deduplicated, so several entries may
/// share a `to_currency` as long as their `from_currency` differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(rename = "FromCurrency")]
    pub from_currency: String,
    #[serde(rename = "ToCurrency")]
    pub to_currency: String,
    #[serde(rename = "ExchangeRate")]
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(from: impl Into<String>, to: impl Into<String>, rate: Decimal) -> Self {
        Self {
            from_currency: from.into(),
            to_currency: to.into(),
            rate,
        }
    }
}

/// Immutable snapshot of the full rate list held by a rate cache.
///
/// Replacing the cache swaps the whole `Arc`, so a reader holding a table
/// never sees a partially written list.
pub type RateTable = Arc<[ExchangeRate]>;

/// Finds the first rate whose `to_currency` matches `code` byte for byte.
pub fn find_by_target<'a>(rates: &'a [ExchangeRate], code: &str) -> Option<&'a ExchangeRate> {
    rates.iter().find(|r| r.to_currency == code)
}
