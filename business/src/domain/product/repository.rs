use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductImage};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products eligible for customer-facing display.
    async fn get_active(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Active products flagged for promotion, capped at `limit`.
    async fn get_featured(&self, limit: i64) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// IN-set lookup: one row per matching product, unknown ids silently absent.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Removing a product also removes its images.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductImageRepository: Send + Sync {
    async fn get_for_product(&self, product_id: Uuid) -> Result<Vec<ProductImage>, RepositoryError>;
    /// Returns the existing image for (product, url) or creates a new one.
    async fn get_or_create(
        &self,
        product_id: Uuid,
        url: &str,
    ) -> Result<ProductImage, RepositoryError>;
    /// Deletes the product's images whose URL is outside the given set.
    /// An empty set deletes every image of the product.
    async fn delete_not_in(
        &self,
        product_id: Uuid,
        urls: &[String],
    ) -> Result<u64, RepositoryError>;
}
