use super::form::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.validation_failed")]
    ValidationFailed(FieldErrors),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
