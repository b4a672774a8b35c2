use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use url::Url;
use uuid::Uuid;

use super::model::{Product, ProductImage};

/// Maximum number of image URL slots on the product form.
pub const MAX_IMAGES: usize = 3;

/// Raw, untyped field values as submitted by a client.
///
/// Mirrors the fixed form schema: three optional image URL slots, a price
/// that still needs numeric parsing, and an optional category reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormData {
    pub name: String,
    pub price: String,
    pub category_id: Option<String>,
    pub active: bool,
    pub featured: bool,
    pub description: String,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
}

impl ProductFormData {
    /// Empty form for the create view. New products default to visible.
    pub fn empty() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Form pre-populated from an existing product for the edit view.
    pub fn from_product(product: &Product, images: &[ProductImage]) -> Self {
        let mut slots = images.iter().map(|i| i.url.clone());
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category_id: product.category_id.map(|id| id.to_string()),
            active: product.active,
            featured: product.featured,
            description: product.description.clone(),
            image_1: slots.next(),
            image_2: slots.next(),
            image_3: slots.next(),
        }
    }

    fn image_slots(&self) -> [(&'static str, Option<&String>); MAX_IMAGES] {
        [
            ("image_1", self.image_1.as_ref()),
            ("image_2", self.image_2.as_ref()),
            ("image_3", self.image_3.as_ref()),
        ]
    }
}

/// Field-keyed validation messages, code-style for i18n compatibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Fully validated product field values, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub name: String,
    pub price: BigDecimal,
    pub category_id: Option<Uuid>,
    pub active: bool,
    pub featured: bool,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// Validates raw form data against the fixed product schema.
///
/// Empty image slots mean "no image" and are excluded from the resulting
/// URL list rather than reported as errors. Category existence is not
/// checked here; only that the reference is a well-formed identifier.
pub fn validate(form: &ProductFormData) -> Result<ValidatedProduct, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.add("name", "field.required");
    }

    let price_input = form.price.trim();
    let mut price = BigDecimal::zero();
    if price_input.is_empty() {
        errors.add("price", "field.required");
    } else {
        match BigDecimal::from_str(price_input) {
            Ok(value) if value < BigDecimal::zero() => {
                errors.add("price", "price.negative");
            }
            Ok(value) => price = value,
            Err(_) => errors.add("price", "price.invalid_number"),
        }
    }

    let mut category_id = None;
    if let Some(raw) = form.category_id.as_ref().map(|c| c.trim())
        && !raw.is_empty()
    {
        match Uuid::parse_str(raw) {
            Ok(id) => category_id = Some(id),
            Err(_) => errors.add("category", "category.invalid_id"),
        }
    }

    let mut image_urls = Vec::new();
    for (field, slot) in form.image_slots() {
        let Some(raw) = slot.map(|s| s.trim()) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        match Url::parse(raw) {
            Ok(_) => image_urls.push(raw.to_string()),
            Err(_) => errors.add(field, "image.invalid_url"),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedProduct {
        name: name.to_string(),
        price,
        category_id,
        active: form.active,
        featured: form.featured,
        description: form.description.trim().to_string(),
        image_urls,
    })
}
