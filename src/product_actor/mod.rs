//! # Product Actor
//!
//! The product catalogue as a resource actor: one [`ResourceActor<Product>`] owns
//! every product and serves create, read, replace, delete and filtered listing.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`], the closed set of failure kinds
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::clients::ProductClient;
//! use storefront::model::{Page, ProductCreate, ProductFilter};
//! use storefront::product_actor;
//! use storefront::use_case::ProductUseCase;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         description: "A widget".to_string(),
//!         category: "tools".to_string(),
//!         color: "red".to_string(),
//!         price: 29.99,
//!         quantity: 100,
//!     };
//!     let id = client.create_product(params).await?;
//!     let page = client.list_products(ProductFilter::default(), Page::default()).await?;
//!     assert_eq!(page[0].id, id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
