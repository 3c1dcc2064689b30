//! # Storefront
//!
//! Boundary adapters for a small storefront, built on the resource actors of
//! [`actor_framework`].
//!
//! Two adapters keep external representations away from the domain:
//!
//! - **Resource handler** ([`handler`]): the Product resource over HTTP. Each
//!   request is decoded, handed to exactly one [`ProductUseCase`](use_case::ProductUseCase)
//!   operation and encoded back. Malformed identifiers, bodies and queries are
//!   answered with `400` before the use case runs.
//! - **Row mapper** ([`storage`]): two-way conversion between the domain
//!   [`Order`](model::Order) and its flat [`OrderRow`](storage::OrderRow), with a
//!   lenient read that never fails and a strict read that reports bad stored values.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`])
//! Plain data: [`Product`](model::Product) with its payloads and filters, and
//! [`Order`](model::Order) with its status tags.
//!
//! ### 2. The Engine ([`product_actor`], [`clients`])
//! The product catalogue runs as a `ResourceActor<Product>`. [`ProductClient`](clients::ProductClient)
//! wraps the generic client, implements the use case and translates framework
//! errors into [`ProductError`](product_actor::ProductError) kinds.
//!
//! ### 3. The Boundary ([`handler`], [`storage`])
//! HTTP in front of the use case, rows behind the order model.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`InventorySystem`](lifecycle::InventorySystem) starts and stops the actor;
//! [`ServiceConfig`](config::ServiceConfig) reads the bind address and channel size.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:8080/products -d '{"name":"Mug","price":9.5,"quantity":3}'
//! curl 'localhost:8080/products?color=red&limit=5'
//! ```

pub mod clients;
pub mod config;
pub mod handler;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod storage;
pub mod use_case;
