use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_catalog::{
    CatalogPage, FEATURED_LIMIT, GetCatalogUseCase,
};

pub struct GetCatalogUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self) -> Result<CatalogPage, ProductError> {
        self.logger.info("Fetching catalog listing");

        let products = self.products.get_active().await?;
        let featured = self.products.get_featured(FEATURED_LIMIT).await?;

        self.logger.info(&format!(
            "Catalog: {} active products, {} featured",
            products.len(),
            featured.len()
        ));
        Ok(CatalogPage { products, featured })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
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

    fn make_product(name: &str, featured: bool) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            BigDecimal::from_str("5.00").unwrap(),
            None,
            true,
            featured,
            String::new(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_return_active_products_and_capped_featured_subset() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_active().returning(|| {
            Ok(vec![
                make_product("Mug", false),
                make_product("Kettle", true),
            ])
        });
        mock_repo
            .expect_get_featured()
            .with(eq(FEATURED_LIMIT))
            .returning(|_| Ok(vec![make_product("Kettle", true)]));

        let use_case = GetCatalogUseCaseImpl {
            products: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let page = result.unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.featured.len(), 1);
        assert!(page.featured.iter().all(|p| p.featured && p.active));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_active()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetCatalogUseCaseImpl {
            products: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
