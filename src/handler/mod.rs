//! # HTTP Boundary
//!
//! The product resource exposed over HTTP with axum. Handlers only translate:
//! they hold no domain logic and depend on the [`ProductUseCase`] seam rather than
//! on the actor directly.
//!
//! - [`product_handler`] - one handler per route
//! - [`dto`] - request and response bodies
//! - [`query`] - list query parsing (paging and typed filters)
//! - [`error`] - [`ApiError`] and its status mapping

pub mod dto;
pub mod error;
pub mod product_handler;
pub mod query;

pub use error::{ApiError, ApiErrorKind, ErrorBody};
pub use product_handler::SharedUseCase;

use crate::use_case::ProductUseCase;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Builds the `/products` routes around a use case.
pub fn product_routes(use_case: Arc<dyn ProductUseCase>) -> Router {
    Router::new()
        .route(
            "/products",
            get(product_handler::list_products).post(product_handler::create_product),
        )
        .route(
            "/products/{id}",
            get(product_handler::get_product)
                .put(product_handler::update_product)
                .delete(product_handler::delete_product),
        )
        .with_state(use_case)
}
