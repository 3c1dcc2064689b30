//! The product use-case seam.
//!
//! HTTP handlers depend on [`ProductUseCase`] only. The production implementation
//! is [`ProductClient`](crate::clients::ProductClient), which forwards to the
//! product actor; tests substitute stubs.

use crate::model::{Page, Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
pub trait ProductUseCase: Send + Sync {
    async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError>;

    /// `Ok(None)` when no product has this ID.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError>;

    /// Products matching `filter`, ordered by ID, restricted to `page`.
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, ProductError>;
}
