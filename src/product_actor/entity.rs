//! [`ActorEntity`] implementation for the [`Product`] domain type.
//!
//! Products carry no hook-level validation: whatever decoded at the boundary is
//! stored as-is, and an update replaces every descriptive field.

use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.matches(self)
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.replace(update);
        Ok(())
    }
}
