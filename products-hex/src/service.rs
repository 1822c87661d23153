//! Product Application Service
//!
//! Validates target currencies against the rate cache and prices product pages.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use rust_decimal::Decimal;

use products_types::domain::find_by_target;
use products_types::{
    AppError, BASE_CURRENCY, ConversionResult, ProductRepository, RateCache, RateTable,
};

/// How a page gets priced once a currency has been accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Base,
    Rate(Decimal),
}

/// Accepts `code` against a rate table, yielding the pricing to apply.
fn resolve(code: &str, rates: Option<&RateTable>) -> Option<Target> {
    match code {
        "" => None,
        BASE_CURRENCY => Some(Target::Base),
        _ => rates
            .and_then(|rates| find_by_target(rates, code))
            .map(|rate| Target::Rate(rate.rate)),
    }
}

/// Application service for product listing and price conversion.
///
/// Generic over `R: ProductRepository` and `C: RateCache` - adapters are injected
/// at construction. The cache is shared with the background refresher, hence the `Arc`.
pub struct ProductService<R: ProductRepository, C: RateCache> {
    repo: R,
    rates: Arc<C>,
}

impl<R: ProductRepository, C: RateCache> ProductService<R, C> {
    /// Creates a new product service over the given repository and rate cache.
    pub fn new(repo: R, rates: Arc<C>) -> Self {
        Self { repo, rates }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Checks whether `code` is an accepted target currency.
    ///
    /// Case-sensitive: `"GBP"` is always valid, anything else must appear as a
    /// `to_currency` in the cached table. No normalisation happens here.
    pub fn is_valid_currency(&self, code: &str) -> bool {
        match code {
            "" => false,
            BASE_CURRENCY => true,
            _ => resolve(code, self.rates.get().as_ref()).is_some(),
        }
    }

    /// Lists a page of products priced in `to_currency`.
    ///
    /// `to_currency` is upper-cased first, so unlike [`Self::is_valid_currency`]
    /// this accepts any casing. Returns `Ok(None)` both for an unknown currency
    /// and for an empty page; callers that must tell them apart check validity
    /// first. The result is a one-element list, matching the wire contract.
    ///
    /// The rate table is read once and used for both the validity check and the
    /// rate lookup, so a refresh landing mid-request cannot invalidate it.
    ///
    /// Data source failures and converted prices that overflow `Decimal` are
    /// returned as `AppError::Internal`.
    pub async fn get_products(
        &self,
        page_start: Option<i32>,
        page_size: Option<i32>,
        to_currency: &str,
    ) -> Result<Option<Vec<ConversionResult>>, AppError> {
        let currency = to_currency.to_uppercase();
        let rates = self.rates.get();

        let Some(target) = resolve(&currency, rates.as_ref()) else {
            tracing::debug!(currency = %currency, "Unknown target currency");
            return Ok(None);
        };

        let products = self.repo.list(page_start, page_size).await?;
        if products.is_empty() {
            return Ok(None);
        }

        let result = match target {
            Target::Base => ConversionResult::in_base_currency(&products),
            Target::Rate(rate) => ConversionResult::converted(&currency, &products, rate)?,
        };

        Ok(Some(vec![result]))
    }
}
