//! Represents a product in the inventory catalogue.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])
//! - List filters ([`ProductFilter`])

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Builds a product from its creation payload once the ID is known.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            category: params.category,
            color: params.color,
            price: params.price,
            quantity: params.quantity,
        }
    }

    /// Overwrites every descriptive field; the ID is left untouched.
    pub fn replace(&mut self, update: ProductUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.category = update.category;
        self.color = update.color;
        self.price = update.price;
        self.quantity = update.quantity;
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
    pub price: f64,
    pub quantity: u32,
}

/// Payload for replacing an existing product. Every field is required.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
    pub price: f64,
    pub quantity: u32,
}

/// Criteria for listing products. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.color.is_none()
    }

    /// Exact, case-sensitive comparison on every field that is set.
    pub fn matches(&self, product: &Product) -> bool {
        fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
            wanted.as_deref().map_or(true, |wanted| wanted == actual)
        }

        field_matches(&self.name, &product.name)
            && field_matches(&self.category, &product.category)
            && field_matches(&self.color, &product.color)
    }
}

/// Window into an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub const DEFAULT_LIMIT: usize = 10;
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new(
            ProductId(3),
            ProductCreate {
                name: "Desk Lamp".to_string(),
                description: "Adjustable arm".to_string(),
                category: "lighting".to_string(),
                color: "red".to_string(),
                price: 34.5,
                quantity: 12,
            },
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&lamp()));
    }

    #[test]
    fn test_filter_requires_every_set_field() {
        let filter = ProductFilter {
            category: Some("lighting".to_string()),
            color: Some("red".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&lamp()));

        let filter = ProductFilter {
            category: Some("lighting".to_string()),
            color: Some("blue".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&lamp()));
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut product = lamp();
        product.replace(ProductUpdate {
            name: "Floor Lamp".to_string(),
            description: String::new(),
            category: "lighting".to_string(),
            color: "black".to_string(),
            price: 80.0,
            quantity: 2,
        });
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.name, "Floor Lamp");
        assert_eq!(product.quantity, 2);
    }

    #[test]
    fn test_default_page() {
        assert_eq!(
            Page::default(),
            Page {
                limit: 10,
                offset: 0
            }
        );
    }
}
