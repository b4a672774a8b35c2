use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::view::{ViewCartParams, ViewCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct ViewCartUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ViewCartUseCase for ViewCartUseCaseImpl {
    async fn execute(&self, params: ViewCartParams) -> Result<Vec<Product>, CartError> {
        self.logger
            .debug(&format!("Resolving cart with {} ids", params.cart.len()));

        if params.cart.is_empty() {
            return Ok(Vec::new());
        }

        let products = self.products.get_by_ids(params.cart.items()).await?;
        Ok(products)
    }
}
