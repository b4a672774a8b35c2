use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Cap on the promotional subset shown on the listing page.
pub const FEATURED_LIMIT: i64 = 4;

/// Listing page data: every active product plus the capped featured subset.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub featured: Vec<Product>,
}

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<CatalogPage, ProductError>;
}
