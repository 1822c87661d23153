//! Fixed values shared by the service and its adapters.

/// Currency product prices are stored in. Always a valid conversion target.
pub const BASE_CURRENCY: &str = "GBP";

/// Configuration section holding the exchange rates, also used as the cache key.
pub const CURRENCY_EXCHANGE_KEY: &str = "CurrencyExchange";

pub const INVALID_PAGE_REQUEST: &str = "Invalid page size or page start";

pub const INVALID_CURRENCY: &str = "Invalid currency value";

pub const DEFAULT_PAGE_START: i32 = 0;

pub const DEFAULT_PAGE_SIZE: i32 = 5;
