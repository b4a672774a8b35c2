#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.item_not_in_cart")]
    ItemNotInCart,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
