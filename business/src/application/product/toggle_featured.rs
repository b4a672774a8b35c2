use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_featured::{
    ToggleFeaturedParams, ToggleFeaturedUseCase,
};

pub struct ToggleFeaturedUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFeaturedUseCase for ToggleFeaturedUseCaseImpl {
    async fn execute(&self, params: ToggleFeaturedParams) -> Result<Product, ProductError> {
        let mut product = self
            .products
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        product.toggle_featured();
        self.products.save(&product).await?;

        self.logger.info(&format!(
            "Product {} featured flag set to {}",
            product.id, product.featured
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn make_product(id: Uuid, featured: bool) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Poster".to_string(),
            BigDecimal::from_str("8.00").unwrap(),
            None,
            true,
            featured,
            String::new(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_flip_featured_flag() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, false)));
        mock_repo
            .expect_save()
            .withf(|p| p.featured)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ToggleFeaturedUseCaseImpl {
            products: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ToggleFeaturedParams { id: product_id })
            .await;

        assert!(result.unwrap().featured);
    }

    #[tokio::test]
    async fn should_restore_original_value_after_two_toggles() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        // First call sees featured=false, second sees the flipped state.
        let mut featured_state = false;
        mock_repo.expect_get_by_id().returning(move |id| {
            let product = make_product(id, featured_state);
            featured_state = !featured_state;
            Ok(product)
        });
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = ToggleFeaturedUseCaseImpl {
            products: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(ToggleFeaturedParams { id: product_id })
            .await
            .unwrap();
        let second = use_case
            .execute(ToggleFeaturedParams { id: product_id })
            .await
            .unwrap();

        assert!(first.featured);
        assert!(!second.featured);
    }

    #[tokio::test]
    async fn should_fail_with_not_found_when_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = ToggleFeaturedUseCaseImpl {
            products: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ToggleFeaturedParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
