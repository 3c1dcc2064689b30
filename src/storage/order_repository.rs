//! In-memory order storage.
//!
//! Orders are kept as [`OrderRow`]s, the same shape a database table would hold,
//! and every read goes through the strict row conversion. A row that no longer
//! converts surfaces as [`OrderError::CorruptRow`] rather than as a half-valid
//! order. Writes run the same checks first, so `save` never stores a row that a
//! later read would reject.

use crate::model::{Order, OrderId, UserId};
use crate::storage::order_row::{to_row, OrderRow, RowError};
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Stored order {id} is corrupt: {source}")]
    CorruptRow {
        id: OrderId,
        #[source]
        source: RowError,
    },

    #[error("Order {id} cannot be stored: {source}")]
    InvalidOrder {
        id: OrderId,
        #[source]
        source: RowError,
    },

    #[error("Order {id} cannot change {field} once persisted")]
    ImmutableField { id: OrderId, field: &'static str },
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    rows: RwLock<BTreeMap<i64, OrderRow>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the order. The row must pass the same checks as a read
    /// (known tags, `updated_at >= created_at`), and replacing is refused when it
    /// would move the stored `created_at`.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn save(&self, order: &Order) -> Result<(), OrderError> {
        let row = to_row(order.clone());
        if let Err(source) = Order::try_from(row.clone()) {
            warn!(error = %source, "Rejected invalid order");
            return Err(OrderError::InvalidOrder {
                id: order.id,
                source,
            });
        }

        let mut rows = self.rows.write().await;

        if let Some(existing) = rows.get(&row.id) {
            if existing.created_at != row.created_at {
                warn!("Rejected change to created_at");
                return Err(OrderError::ImmutableField {
                    id: order.id,
                    field: "created_at",
                });
            }
        }

        rows.insert(row.id, row);
        info!(size = rows.len(), "Saved");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let rows = self.rows.read().await;
        let Some(row) = rows.get(&id.0) else {
            debug!("Not found");
            return Ok(None);
        };

        Order::try_from(row.clone())
            .map(Some)
            .map_err(|source| OrderError::CorruptRow { id, source })
    }

    /// Every order owned by `user_id`, in id order. Fails on the first corrupt row.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let rows = self.rows.read().await;
        let orders = rows
            .values()
            .filter(|row| row.user_id == user_id.0)
            .map(|row| {
                Order::try_from(row.clone()).map_err(|source| OrderError::CorruptRow {
                    id: OrderId(row.id),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = orders.len(), "Listed");
        Ok(orders)
    }

    /// Writes a row as-is, bypassing the domain type.
    pub async fn insert_row(&self, row: OrderRow) {
        self.rows.write().await.insert(row.id, row);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
