use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductImage;
use business::domain::product::repository::ProductImageRepository;

use super::entity::ProductImageEntity;

pub struct ProductImageRepositoryPostgres {
    pool: PgPool,
}

impl ProductImageRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductImageRepository for ProductImageRepositoryPostgres {
    async fn get_for_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, product_id, url, created_at FROM product_images WHERE product_id = $1 ORDER BY created_at",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_or_create(
        &self,
        product_id: Uuid,
        url: &str,
    ) -> Result<ProductImage, RepositoryError> {
        let existing = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, product_id, url, created_at FROM product_images WHERE product_id = $1 AND url = $2",
        )
        .bind(product_id)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if let Some(entity) = existing {
            return Ok(entity.into_domain());
        }

        let image = ProductImage::new(product_id, url);
        sqlx::query(
            "INSERT INTO product_images (id, product_id, url, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(image.id)
        .bind(image.product_id)
        .bind(&image.url)
        .bind(image.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(image)
    }

    async fn delete_not_in(
        &self,
        product_id: Uuid,
        urls: &[String],
    ) -> Result<u64, RepositoryError> {
        // With an empty set this drops every image of the product.
        let result = sqlx::query(
            "DELETE FROM product_images WHERE product_id = $1 AND url != ALL($2)",
        )
        .bind(product_id)
        .bind(urls)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
