//! Request and response bodies for the product routes.
//!
//! These types exist only at the HTTP edge. They convert into the domain payloads
//! ([`ProductCreate`], [`ProductUpdate`]) and out of the domain [`Product`]; the
//! handler never serializes a domain type directly.

use crate::model::{Product, ProductCreate, ProductUpdate};
use serde::{Deserialize, Serialize};

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Only structure is checked here (required fields present, numbers of the right
/// type). Field contents are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
    pub price: f64,
    pub quantity: u32,
}

impl CreateProductRequest {
    pub fn into_create(self) -> ProductCreate {
        ProductCreate {
            name: self.name,
            description: self.description,
            category: self.category,
            color: self.color,
            price: self.price,
            quantity: self.quantity,
        }
    }

    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            description: self.description,
            category: self.category,
            color: self.color,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name,
            description: product.description,
            category: product.category,
            color: product.color,
            price: product.price,
            quantity: product.quantity,
        }
    }
}
