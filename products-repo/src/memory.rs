//! In-memory product catalogue.

use async_trait::async_trait;
use rust_decimal::Decimal;

use products_types::{Product, ProductRepository, RepoError};

/// Read-only product list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepo {
    products: Vec<Product>,
}

impl InMemoryProductRepo {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The standard bakery range, priced in GBP.
    pub fn with_catalogue() -> Self {
        let products = [
            ("Sausage Roll", 100),
            ("Vegan Sausage Roll", 110),
            ("Steak Bake", 120),
            ("Yum Yum", 70),
            ("Pink Jammie", 50),
            ("Mexican Baguette", 210),
            ("Bacon Sandwich", 195),
            ("Coca Cola", 120),
        ]
        .into_iter()
        .map(|(name, pence)| Product::new(name, Decimal::new(pence, 2)))
        .collect();

        Self::new(products)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn list(
        &self,
        page_start: Option<i32>,
        page_size: Option<i32>,
    ) -> Result<Vec<Product>, RepoError> {
        // Negative skip is no skip; negative take is nothing.
        let skip = page_start.map_or(0, |s| s.max(0) as usize);
        let take = page_size.map_or(usize::MAX, |s| s.max(0) as usize);

        let page: Vec<Product> = self.products.iter().skip(skip).take(take).cloned().collect();
        tracing::debug!(?page_start, ?page_size, returned = page.len(), "Listed products");
        Ok(page)
    }
}
