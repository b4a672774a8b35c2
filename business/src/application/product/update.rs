use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::form::{self, FieldErrors};
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductImageRepository, ProductRepository};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub images: Arc<dyn ProductImageRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .products
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

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

        let updated = existing.apply(&validated);
        self.products.save(&updated).await?;

        // Reconcile images against the submitted URL set: drop what is no
        // longer referenced, keep existing matches untouched, create the rest.
        self.images
            .delete_not_in(updated.id, &validated.image_urls)
            .await?;
        for url in &validated.image_urls {
            self.images.get_or_create(updated.id, url).await?;
        }

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
