//! In-memory rate cache.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use products_types::{CURRENCY_EXCHANGE_KEY, ExchangeRate, RateCache, RateTable};

/// Thread-safe keyed store holding the rate table under `CurrencyExchange`.
///
/// Entries are `Arc` tables: `set` swaps the pointer under the shard lock and
/// `get` clones it, so readers always hold a complete table.
#[derive(Debug, Default)]
pub struct MemoryRateCache {
    entries: DashMap<&'static str, RateTable>,
}

impl MemoryRateCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateCache for MemoryRateCache {
    fn get(&self) -> Option<RateTable> {
        let table = self
            .entries
            .get(CURRENCY_EXCHANGE_KEY)
            .map(|entry| entry.value().clone());
        if table.is_none() {
            debug!("Rate cache miss");
        }
        table
    }

    fn set(&self, rates: Vec<ExchangeRate>) {
        debug!(count = rates.len(), "Rate cache replaced");
        self.entries.insert(CURRENCY_EXCHANGE_KEY, Arc::from(rates));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn table(marker: &str, len: usize) -> Vec<ExchangeRate> {
        (0..len)
            .map(|i| ExchangeRate::new(marker, format!("C{i}"), Decimal::from(i as i64)))
            .collect()
    }

    #[test]
    fn test_absent_before_first_set() {
        let cache = MemoryRateCache::new();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let cache = MemoryRateCache::new();
        cache.set(vec![ExchangeRate::new("GBP", "EUR", dec!(1.1))]);

        let rates = cache.get().unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].to_currency, "EUR");
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let cache = MemoryRateCache::new();
        cache.set(table("A", 3));
        cache.set(table("B", 1));

        let rates = cache.get().unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].from_currency, "B");
    }

    #[test]
    fn test_empty_set_is_present_not_absent() {
        let cache = MemoryRateCache::new();
        cache.set(Vec::new());
        assert!(cache.get().is_some_and(|rates| rates.is_empty()));
    }

    #[test]
    fn test_readers_never_observe_torn_tables() {
        let cache = Arc::new(MemoryRateCache::new());
        cache.set(table("A", 3));

        let writer = {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for i in 0..2_000 {
                    if i % 2 == 0 {
                        cache.set(table("B", 5));
                    } else {
                        cache.set(table("A", 3));
                    }
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for _ in 0..2_000 {
                        let rates = cache.get().unwrap();
                        let marker = rates[0].from_currency.clone();
                        let expected = if marker == "A" { 3 } else { 5 };
                        assert_eq!(rates.len(), expected);
                        assert!(rates.iter().all(|r| r.from_currency == marker));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
