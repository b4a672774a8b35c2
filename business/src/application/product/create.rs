use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::form::{self, FieldErrors};
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductImageRepository, ProductRepository};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub images: Arc<dyn ProductImageRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.form.name));

        let validated = form::validate(&params.form).map_err(ProductError::ValidationFailed)?;

        if let Some(category_id) = validated.category_id {
            match self.categories.get_by_id(category_id).await {
                Ok(_) => {}
                Err(RepositoryError::NotFound) => {
                    return Err(ProductError::ValidationFailed(FieldErrors::single(
                        "category",
                        "category.not_found",
                    )));
                }
                Err(other) => return Err(ProductError::Repository(other)),
            }
        }

        let product = Product::new(&validated);
        self.products.save(&product).await?;

        for url in &validated.image_urls {
            self.images.get_or_create(product.id, url).await?;
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
