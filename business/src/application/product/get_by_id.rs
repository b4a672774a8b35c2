use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::{ProductImageRepository, ProductRepository};
use crate::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase, ProductDetail,
};

pub struct GetProductByIdUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub images: Arc<dyn ProductImageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<ProductDetail, ProductError> {
        self.logger
            .debug(&format!("Fetching product: {}", params.id));

        let product = self
            .products
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;
        let images = self.images.get_for_product(product.id).await?;

        Ok(ProductDetail { product, images })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{Product, ProductImage};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_active(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_featured(&self, limit: i64) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ImageRepo {}

        #[async_trait]
        impl ProductImageRepository for ImageRepo {
            async fn get_for_product(&self, product_id: Uuid) -> Result<Vec<ProductImage>, RepositoryError>;
            async fn get_or_create(&self, product_id: Uuid, url: &str) -> Result<ProductImage, RepositoryError>;
            async fn delete_not_in(&self, product_id: Uuid, urls: &[String]) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_with_images() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_products = MockProductRepo::new();
        mock_products.expect_get_by_id().returning(move |id| {
            Ok(Product::from_repository(
                id,
                "Lamp".to_string(),
                BigDecimal::from_str("30.00").unwrap(),
                None,
                true,
                false,
                String::new(),
                now,
                now,
            ))
        });
        let mut mock_images = MockImageRepo::new();
        mock_images
            .expect_get_for_product()
            .returning(|product_id| {
                Ok(vec![ProductImage::new(
                    product_id,
                    "https://cdn.example.com/lamp.jpg",
                )])
            });

        let use_case = GetProductByIdUseCaseImpl {
            products: Arc::new(mock_products),
            images: Arc::new(mock_images),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await;

        assert!(result.is_ok());
        let detail = result.unwrap();
        assert_eq!(detail.product.id, product_id);
        assert_eq!(detail.images.len(), 1);
    }

    #[tokio::test]
    async fn should_fail_with_not_found_when_missing() {
        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_images = MockImageRepo::new();
        mock_images.expect_get_for_product().never();

        let use_case = GetProductByIdUseCaseImpl {
            products: Arc::new(mock_products),
            images: Arc::new(mock_images),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
