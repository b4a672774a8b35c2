use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        let mut cart = params.cart;
        cart.remove(params.product_id)?;

        self.logger.info(&format!(
            "Removed product {} from cart ({} items left)",
            params.product_id,
            cart.len()
        ));
        Ok(cart)
    }
}
