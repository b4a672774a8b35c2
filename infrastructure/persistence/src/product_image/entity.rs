use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::ProductImage;

#[derive(Debug, FromRow)]
pub struct ProductImageEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl ProductImageEntity {
    pub fn into_domain(self) -> ProductImage {
        ProductImage::from_repository(self.id, self.product_id, self.url, self.created_at)
    }
}
