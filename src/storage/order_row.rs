//! # Order Row Mapper
//!
//! Converts between the domain [`Order`] and [`OrderRow`], its flat storage shape.
//!
//! There are two read paths:
//!
//! - [`from_row`] is lenient and never fails. Status text that is not a known tag
//!   comes back as `Unrecognized` so a legacy row can still be inspected.
//! - `Order::try_from(row)` is strict. It fails with [`RowError`] naming the
//!   offending column, and also rejects rows whose timestamps are out of order.
//!
//! Writing is always [`to_row`], which renders each tag with its `as_str` form.

use crate::model::{Order, OrderId, OrderStatus, PaymentStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage shape of an order; one field per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub payment_status: String,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid stored value in column {column}: {value:?}")]
    InvalidStoredValue { column: &'static str, value: String },

    #[error("updated_at {updated_at} is earlier than created_at {created_at}")]
    TimestampOrder {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

pub fn to_row(order: Order) -> OrderRow {
    OrderRow {
        id: order.id.0,
        user_id: order.user_id.0,
        status: order.status.as_str().to_string(),
        payment_status: order.payment_status.as_str().to_string(),
        total_amount: order.total_amount,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

pub fn from_row(row: OrderRow) -> Order {
    Order {
        id: OrderId(row.id),
        user_id: UserId(row.user_id),
        status: OrderStatus::from_stored(row.status),
        payment_status: PaymentStatus::from_stored(row.payment_status),
        total_amount: row.total_amount,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        to_row(order)
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = RowError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|e| RowError::InvalidStoredValue {
                column: "status",
                value: e.value,
            })?;
        let payment_status =
            row.payment_status
                .parse::<PaymentStatus>()
                .map_err(|e| RowError::InvalidStoredValue {
                    column: "payment_status",
                    value: e.value,
                })?;
        if row.updated_at < row.created_at {
            return Err(RowError::TimestampOrder {
                created_at: row.created_at,
                updated_at: row.updated_at,
            });
        }

        Ok(Order {
            id: OrderId(row.id),
            user_id: UserId(row.user_id),
            status,
            payment_status,
            total_amount: row.total_amount,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn shipped_order() -> Order {
        let created = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let mut order = Order::new(OrderId(11), UserId(3), 249.99, created);
        order.status = OrderStatus::Shipped;
        order.payment_status = PaymentStatus::Paid;
        order.touch(created + Duration::days(2));
        order
    }

    #[test]
    fn test_to_row_renders_tags_as_text() {
        let row = to_row(shipped_order());
        assert_eq!(row.id, 11);
        assert_eq!(row.user_id, 3);
        assert_eq!(row.status, "shipped");
        assert_eq!(row.payment_status, "paid");
        assert_eq!(row.total_amount, 249.99);
        assert!(row.updated_at > row.created_at);
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let order = shipped_order();
        assert_eq!(from_row(to_row(order.clone())), order);
        assert_eq!(Order::try_from(to_row(order.clone())), Ok(order));
    }

    #[test]
    fn test_lenient_read_keeps_unknown_tags() {
        let mut row = to_row(shipped_order());
        row.status = "lost_in_transit".to_string();
        row.payment_status = "chargeback".to_string();

        let order = from_row(row.clone());
        assert_eq!(
            order.status,
            OrderStatus::Unrecognized("lost_in_transit".to_string())
        );
        assert_eq!(
            order.payment_status,
            PaymentStatus::Unrecognized("chargeback".to_string())
        );
        // Writing it back reproduces the stored text.
        assert_eq!(to_row(order), row);
    }

    #[test]
    fn test_strict_read_names_the_bad_column() {
        let mut row = to_row(shipped_order());
        row.payment_status = "chargeback".to_string();
        assert_eq!(
            Order::try_from(row.clone()),
            Err(RowError::InvalidStoredValue {
                column: "payment_status",
                value: "chargeback".to_string(),
            })
        );

        row.status = "Shipped".to_string();
        let err = Order::try_from(row).unwrap_err();
        assert!(matches!(
            err,
            RowError::InvalidStoredValue { column: "status", .. }
        ));
    }

    #[test]
    fn test_strict_read_rejects_rewound_timestamps() {
        let mut row = to_row(shipped_order());
        row.updated_at = row.created_at - Duration::seconds(1);
        assert!(matches!(
            Order::try_from(row),
            Err(RowError::TimestampOrder { .. })
        ));
    }

    #[test]
    fn test_row_json_uses_snake_case_columns() {
        let json = serde_json::to_value(to_row(shipped_order())).unwrap();
        assert_eq!(json["payment_status"], "paid");
        assert_eq!(json["total_amount"], 249.99);
        assert!(json.get("created_at").is_some());
    }
}
