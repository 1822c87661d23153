//! Exchange rate ports.
//!
//! `ExchangeRateSource` is the slow, authoritative read; `RateCache` is what
//! requests consult. Only the background refresher talks to both.

use crate::domain::{ExchangeRate, RateTable};
use crate::error::RateSourceError;

/// Port trait for reading the full exchange rate list.
pub trait ExchangeRateSource: Send + Sync + 'static {
    /// Reads every configured rate. Called once per refresh tick, never cached.
    ///
    /// An absent configuration section yields an empty list, not an error.
    fn get_rates(&self) -> Result<Vec<ExchangeRate>, RateSourceError>;
}

/// Port trait for the shared in-memory rate store.
///
/// Single writer, many readers. `set` must replace the whole table in one step.
pub trait RateCache: Send + Sync + 'static {
    /// Returns the current table, or `None` if nothing has been stored yet.
    fn get(&self) -> Option<RateTable>;

    /// Replaces the stored table wholesale.
    fn set(&self, rates: Vec<ExchangeRate>);
}
