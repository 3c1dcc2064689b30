//! Order persistence: the row mapper and an in-memory repository built on it.

pub mod order_repository;
pub mod order_row;

pub use order_repository::{InMemoryOrderRepository, OrderError};
pub use order_row::{from_row, to_row, OrderRow, RowError};
