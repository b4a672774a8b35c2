use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::form::ValidatedProduct;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub category_id: Option<Uuid>,
    pub active: bool,
    pub featured: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new product from already validated form output.
    pub fn new(fields: &ValidatedProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name.clone(),
            price: fields.price.clone(),
            category_id: fields.category_id,
            active: fields.active,
            featured: fields.featured,
            description: fields.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy with the editable fields replaced, keeping identity
    /// and creation time.
    pub fn apply(&self, fields: &ValidatedProduct) -> Self {
        Self {
            id: self.id,
            name: fields.name.clone(),
            price: fields.price.clone(),
            category_id: fields.category_id,
            active: fields.active,
            featured: fields.featured,
            description: fields.description.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// Flips the promotional flag.
    pub fn toggle_featured(&mut self) {
        self.featured = !self.featured;
        self.updated_at = Utc::now();
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: BigDecimal,
        category_id: Option<Uuid>,
        active: bool,
        featured: bool,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category_id,
            active,
            featured,
            description,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl ProductImage {
    pub fn new(product_id: Uuid, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            url: url.into(),
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fields(name: &str) -> ValidatedProduct {
        ValidatedProduct {
            name: name.to_string(),
            price: BigDecimal::from_str("12.50").unwrap(),
            category_id: None,
            active: true,
            featured: false,
            description: String::new(),
            image_urls: vec![],
        }
    }

    #[test]
    fn should_assign_identity_and_timestamps_on_new() {
        let product = Product::new(&fields("Mug"));

        assert_eq!(product.name, "Mug");
        assert!(product.active);
        assert!(!product.featured);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_keep_identity_when_applying_edits() {
        let product = Product::new(&fields("Mug"));
        let mut edit = fields("Big Mug");
        edit.featured = true;

        let updated = product.apply(&edit);

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, "Big Mug");
        assert!(updated.featured);
    }

    #[test]
    fn should_return_to_original_state_after_double_toggle() {
        let mut product = Product::new(&fields("Mug"));
        let original = product.featured;

        product.toggle_featured();
        assert_eq!(product.featured, !original);

        product.toggle_featured();
        assert_eq!(product.featured, original);
    }

    #[test]
    fn should_bind_image_to_owning_product() {
        let product_id = Uuid::new_v4();
        let image = ProductImage::new(product_id, "https://cdn.example.com/mug.jpg");

        assert_eq!(image.product_id, product_id);
        assert_eq!(image.url, "https://cdn.example.com/mug.jpg");
    }
}
