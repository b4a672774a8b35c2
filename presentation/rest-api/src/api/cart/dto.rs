use poem_openapi::Object;

use crate::api::product::dto::ProductResponse;

/// Add or remove a single product from the session cart.
#[derive(Debug, Clone, Object)]
pub struct CartItemRequest {
    /// Product unique identifier
    pub product_id: String,
}

/// Cart page context: the cart's id sequence resolved to products.
#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub products: Vec<ProductResponse>,
}
