//! Product and price-conversion models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::BASE_CURRENCY;
use crate::error::AppError;

/// A product as supplied by the product data source, priced in the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price_in_base_currency: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price_in_base_currency: Decimal) -> Self {
        Self {
            name: name.into(),
            price_in_base_currency,
        }
    }
}

/// A product line in a conversion result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPrice {
    #[schema(example = "Steak Bake")]
    pub name: String,
    /// Price in the result's currency
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1.54)]
    pub price: Decimal,
}

/// A page of products priced in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    #[schema(example = "EUR")]
    pub currency: String,
    #[serde(rename = "productsCount")]
    #[schema(example = 1)]
    pub product_count: usize,
    pub products: Vec<ProductPrice>,
}

impl ConversionResult {
    /// Builds a result in the base currency; prices pass through unchanged.
    pub fn in_base_currency(products: &[Product]) -> Self {
        let priced = products
            .iter()
            .map(|p| ProductPrice {
                name: p.name.clone(),
                price: p.price_in_base_currency,
            })
            .collect();
        Self::build(BASE_CURRENCY, priced)
    }

    /// Builds a result in `currency`, multiplying every base price by `rate`.
    ///
    /// Fails if a converted price does not fit in a `Decimal`.
    pub fn converted(
        currency: &str,
        products: &[Product],
        rate: Decimal,
    ) -> Result<Self, AppError> {
        let priced = products
            .iter()
            .map(|p| {
                let price = p.price_in_base_currency.checked_mul(rate).ok_or_else(|| {
                    AppError::Internal(format!(
                        "Price of {} overflowed converting to {} at rate {}",
                        p.name, currency, rate
                    ))
                })?;
                Ok(ProductPrice {
                    name: p.name.clone(),
                    price,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        Ok(Self::build(currency, priced))
    }

    fn build(currency: &str, products: Vec<ProductPrice>) -> Self {
        Self {
            currency: currency.to_string(),
            product_count: products.len(),
            products,
        }
    }
}
