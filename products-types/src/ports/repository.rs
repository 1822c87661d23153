//! Product repository port.
//!
//! Adapters (in-memory catalogue, external stores) implement this trait.

use crate::domain::Product;
use crate::error::RepoError;

/// Paginated read access to the product catalogue.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Lists products, skipping `page_start` items and taking at most `page_size`.
    ///
    /// `None` means "no skip" / "no limit" respectively.
    async fn list(
        &self,
        page_start: Option<i32>,
        page_size: Option<i32>,
    ) -> Result<Vec<Product>, RepoError>;
}
