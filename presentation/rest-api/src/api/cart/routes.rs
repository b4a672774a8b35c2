use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, payload::Json};
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use business::domain::cart::use_cases::view::{ViewCartParams, ViewCartUseCase};

use crate::api::cart::dto::{CartItemRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::routes::{not_found_body, parse_product_id};
use crate::api::tags::ApiTags;

/// Session key holding the cart's product id sequence.
pub const CART_SESSION_KEY: &str = "products_in_cart";

pub struct CartApi {
    view_use_case: Arc<dyn ViewCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
}

impl CartApi {
    pub fn new(
        view_use_case: Arc<dyn ViewCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    ) -> Self {
        Self {
            view_use_case,
            add_use_case,
            remove_use_case,
        }
    }

    fn load_cart(session: &Session) -> Cart {
        Cart::from_items(session.get::<Vec<Uuid>>(CART_SESSION_KEY).unwrap_or_default())
    }

    fn store_cart(session: &Session, cart: Cart) {
        session.set(CART_SESSION_KEY, cart.into_items());
    }
}

/// Session cart API
///
/// The cart lives entirely in the visitor's session as an ordered list of
/// product ids. Duplicates are allowed; removing takes out one occurrence.
#[OpenApi]
impl CartApi {
    /// Cart page
    ///
    /// Resolves the session cart against the catalog. Ids with no matching
    /// product are dropped from the view without modifying the session.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn view_cart(&self, session: &Session) -> ViewCartResponse {
        let cart = Self::load_cart(session);

        match self.view_use_case.execute(ViewCartParams { cart }).await {
            Ok(products) => ViewCartResponse::Ok(Json(CartResponse {
                products: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ViewCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Appends the id to the session cart and redirects to the listing page.
    #[oai(path = "/cart/add", method = "post", tag = "ApiTags::Cart")]
    async fn add_to_cart(
        &self,
        session: &Session,
        body: Json<CartItemRequest>,
    ) -> CartMutationResponse {
        let Some(product_id) = parse_product_id(&body.0.product_id) else {
            return CartMutationResponse::NotFound(not_found_body());
        };

        let cart = Self::load_cart(session);

        match self
            .add_use_case
            .execute(AddToCartParams { cart, product_id })
            .await
        {
            Ok(cart) => {
                Self::store_cart(session, cart);
                CartMutationResponse::Redirect("/products".to_string())
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the cart
    ///
    /// Takes the first occurrence of the id out of the session cart and
    /// redirects to the cart page. Ids not present in the cart are a 404.
    #[oai(path = "/cart/remove", method = "post", tag = "ApiTags::Cart")]
    async fn remove_from_cart(
        &self,
        session: &Session,
        body: Json<CartItemRequest>,
    ) -> CartMutationResponse {
        let Some(product_id) = parse_product_id(&body.0.product_id) else {
            return CartMutationResponse::NotFound(not_found_body());
        };

        let cart = Self::load_cart(session);

        match self
            .remove_use_case
            .execute(RemoveFromCartParams { cart, product_id })
            .await
        {
            Ok(cart) => {
                Self::store_cart(session, cart);
                CartMutationResponse::Redirect("/cart".to_string())
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CartMutationResponse::NotFound(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ViewCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 302)]
    Redirect(#[oai(header = "Location")] String),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
