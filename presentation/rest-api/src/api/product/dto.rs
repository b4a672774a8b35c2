use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::model::Category;
use business::domain::product::form::{FieldErrors, ProductFormData};
use business::domain::product::model::{Product, ProductImage};

/// Raw product form fields, used both for submissions and for re-rendering
/// the form with its current values.
#[derive(Debug, Clone, Object)]
pub struct ProductFormFields {
    /// Product name; an omitted or empty value comes back as a `name`
    /// field error, not a deserialization failure
    #[oai(default)]
    pub name: String,
    /// Price as a decimal string; presence and format are checked by the
    /// validator so the form re-renders with field errors
    #[oai(default)]
    pub price: String,
    /// Optional category reference
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    /// Whether the product is visible in the catalog
    #[oai(default)]
    pub active: bool,
    /// Whether the product is promoted on the listing page
    #[oai(default)]
    pub featured: bool,
    #[oai(default)]
    pub description: String,
    /// Image URL slots; empty or missing means "no image"
    #[oai(skip_serializing_if_is_none)]
    pub image_1: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_2: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_3: Option<String>,
}

impl From<ProductFormFields> for ProductFormData {
    fn from(fields: ProductFormFields) -> Self {
        Self {
            name: fields.name,
            price: fields.price,
            category_id: fields.category_id,
            active: fields.active,
            featured: fields.featured,
            description: fields.description,
            image_1: fields.image_1,
            image_2: fields.image_2,
            image_3: fields.image_3,
        }
    }
}

impl From<ProductFormData> for ProductFormFields {
    fn from(form: ProductFormData) -> Self {
        Self {
            name: form.name,
            price: form.price,
            category_id: form.category_id,
            active: form.active,
            featured: form.featured,
            description: form.description,
            image_1: form.image_1,
            image_2: form.image_2,
            image_3: form.image_3,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
        }
    }
}

/// Context the view layer needs to render a product form: the current
/// values, any field errors, and the category choices.
#[derive(Debug, Clone, Object)]
pub struct ProductFormContext {
    pub values: ProductFormFields,
    /// Field-keyed validation message codes; empty for a fresh form
    pub errors: BTreeMap<String, Vec<String>>,
    pub categories: Vec<CategoryResponse>,
}

impl ProductFormContext {
    pub fn new(values: ProductFormData, errors: FieldErrors, categories: Vec<Category>) -> Self {
        Self {
            values: values.into(),
            errors: errors.into_map(),
            categories: categories.into_iter().map(|c| c.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    /// Price as a decimal string
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    pub active: bool,
    pub featured: bool,
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price.to_string(),
            category_id: product.category_id.map(|id| id.to_string()),
            active: product.active,
            featured: product.featured,
            description: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductImageResponse {
    pub id: String,
    pub url: String,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id.to_string(),
            url: image.url,
        }
    }
}

/// Listing page context: every active product plus the featured subset.
#[derive(Debug, Clone, Object)]
pub struct CatalogResponse {
    pub products: Vec<ProductResponse>,
    pub featured_products: Vec<ProductResponse>,
}

/// Edit page context: the product, its images, and the pre-filled form.
#[derive(Debug, Clone, Object)]
pub struct EditProductView {
    pub product: ProductResponse,
    pub images: Vec<ProductImageResponse>,
    pub form: ProductFormContext,
}

/// Delete confirmation context.
#[derive(Debug, Clone, Object)]
pub struct DeleteProductView {
    pub product: ProductResponse,
}
