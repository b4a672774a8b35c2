use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        // The id is not checked against the catalog here; a stale id is
        // dropped when the cart is resolved for display.
        let mut cart = params.cart;
        cart.add(params.product_id);

        self.logger.info(&format!(
            "Added product {} to cart ({} items)",
            params.product_id,
            cart.len()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

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

    #[tokio::test]
    async fn should_append_product_to_cart() {
        let product_id = Uuid::new_v4();
        let use_case = AddToCartUseCaseImpl {
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                cart: Cart::new(),
                product_id,
            })
            .await
            .unwrap();

        assert_eq!(cart.items(), &[product_id]);
    }

    #[tokio::test]
    async fn should_allow_same_product_twice() {
        let product_id = Uuid::new_v4();
        let use_case = AddToCartUseCaseImpl {
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                cart: Cart::from_items(vec![product_id]),
                product_id,
            })
            .await
            .unwrap();

        assert_eq!(cart.items(), &[product_id, product_id]);
    }
}
