//! Domain types: the product catalogue managed by the product actor, and customer
//! orders persisted through the row mapper in [`crate::storage`].

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
