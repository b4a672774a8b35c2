use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ToggleFeaturedParams {
    pub id: Uuid,
}

#[async_trait]
pub trait ToggleFeaturedUseCase: Send + Sync {
    /// Flips the promotional flag and persists. Calling twice restores the
    /// original value.
    async fn execute(&self, params: ToggleFeaturedParams) -> Result<Product, ProductError>;
}
