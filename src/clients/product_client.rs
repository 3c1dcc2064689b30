//! # Product Client
//!
//! Implements [`ProductUseCase`] on top of a `ResourceClient<Product>`, translating
//! framework failures into [`ProductError`] kinds.
use crate::model::{Page, Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use crate::use_case::ProductUseCase;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from_framework(None, e)
    }

    fn map_id_error(id: &ProductId, e: FrameworkError) -> Self::Error {
        ProductError::from_framework(Some(*id), e)
    }
}

#[async_trait]
impl ProductUseCase for ProductClient {
    #[instrument(skip(self, params))]
    async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(?params, "create_product called");
        self.inner
            .create(params)
            .await
            .map_err(|e| ProductError::from_framework(None, e))
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id).await
    }

    #[instrument(skip(self, update))]
    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(?update, "update_product called");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| Self::map_id_error(&id, e))
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.delete(id).await
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, ProductError> {
        self.list(filter, page.offset, page.limit).await
    }
}
