use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::form::ProductFormData;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub form: ProductFormData,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
