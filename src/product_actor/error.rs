//! Error types for the Product actor.

use crate::model::ProductId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
///
/// The variants are a closed set of *kinds* so the HTTP layer can pick a status
/// code for each without inspecting message text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The request conflicts with the current state of the product.
    #[error("Product conflict: {0}")]
    Conflict(String),

    /// The product actor is not accepting requests.
    #[error("Product service unavailable: {0}")]
    Unavailable(String),

    /// Any other failure inside the product service.
    #[error("Product service error: {0}")]
    Internal(String),
}

impl ProductError {
    /// Translates a framework error, keeping the kind of a `ProductError` raised by
    /// an entity hook.
    pub fn from_framework(id: Option<ProductId>, err: FrameworkError) -> Self {
        if let (Some(id), true) = (id, err.is_not_found()) {
            return ProductError::NotFound(id);
        }
        match err {
            // Only reachable without a requested ID.
            FrameworkError::NotFound(raw) => {
                ProductError::Internal(format!("Item not found: {raw}"))
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ProductError::Unavailable(err.to_string())
            }
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(product_err) => *product_err,
                Err(other) => ProductError::Internal(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_the_requested_id() {
        let err = ProductError::from_framework(
            Some(ProductId(4)),
            FrameworkError::NotFound("product_4".to_string()),
        );
        assert_eq!(err, ProductError::NotFound(ProductId(4)));
        assert_eq!(err.to_string(), "Product not found: product_4");
    }

    #[test]
    fn test_not_found_without_an_id_is_internal() {
        let err = ProductError::from_framework(
            None,
            FrameworkError::NotFound("product_4".to_string()),
        );
        assert_eq!(
            err,
            ProductError::Internal("Item not found: product_4".to_string())
        );
    }

    #[test]
    fn test_channel_failures_are_unavailable() {
        let err = ProductError::from_framework(None, FrameworkError::ActorClosed);
        assert_eq!(err, ProductError::Unavailable("Actor closed".to_string()));
    }

    #[test]
    fn test_entity_errors_keep_their_kind() {
        let err = ProductError::from_framework(
            None,
            FrameworkError::entity(ProductError::Conflict("name taken".to_string())),
        );
        assert_eq!(err, ProductError::Conflict("name taken".to_string()));

        let err = ProductError::from_framework(
            None,
            FrameworkError::entity(std::io::Error::other("disk full")),
        );
        assert_eq!(err, ProductError::Internal("disk full".to_string()));
    }
}
