//! Runtime orchestration and lifecycle management.
//!
//! - [`InventorySystem`] - spawns the product actor and shuts it down cleanly
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure
//!
//! Configuration lives next door in [`crate::config`].

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use tracing::*;
