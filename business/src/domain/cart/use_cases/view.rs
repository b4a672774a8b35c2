use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::product::model::Product;

pub struct ViewCartParams {
    pub cart: Cart,
}

#[async_trait]
pub trait ViewCartUseCase: Send + Sync {
    /// Resolves the cart's id sequence against the catalog. Stale ids are
    /// silently dropped by the IN-set lookup.
    async fn execute(&self, params: ViewCartParams) -> Result<Vec<Product>, CartError>;
}
