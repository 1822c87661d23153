//! Rate sources backed by static configuration.

use std::path::PathBuf;

use serde::Deserialize;

use products_types::{ExchangeRate, ExchangeRateSource, RateSourceError};

/// Shape of the settings document; every other top-level key is ignored.
#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(rename = "CurrencyExchange", default)]
    currency_exchange: Option<Vec<ExchangeRate>>,
}

/// Parses a JSON settings document and binds its `CurrencyExchange` section.
///
/// A missing or `null` section yields an empty list.
pub fn parse_settings(raw: &str) -> Result<Vec<ExchangeRate>, RateSourceError> {
    let settings: Settings = serde_json::from_str(raw)?;
    Ok(settings.currency_exchange.unwrap_or_default())
}

/// Reads rates from a JSON settings file on every call.
#[derive(Debug, Clone)]
pub struct ConfigRateSource {
    path: PathBuf,
}

impl ConfigRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExchangeRateSource for ConfigRateSource {
    fn get_rates(&self) -> Result<Vec<ExchangeRate>, RateSourceError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let rates = parse_settings(&raw)?;
        tracing::debug!(path = %self.path.display(), count = rates.len(), "Read exchange rates");
        Ok(rates)
    }
}

/// Fixed in-memory rate list.
#[derive(Debug, Clone, Default)]
pub struct StaticRateSource {
    rates: Vec<ExchangeRate>,
}

impl StaticRateSource {
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self { rates }
    }
}

impl ExchangeRateSource for StaticRateSource {
    fn get_rates(&self) -> Result<Vec<ExchangeRate>, RateSourceError> {
        Ok(self.rates.clone())
    }
}
