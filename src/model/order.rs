//! Customer orders and their lifecycle/payment tags.
//!
//! Both status enums are *tagged strings*: each known tag has a fixed textual form
//! (`as_str`) used on the wire and in storage. Text read back from storage that is
//! not a known tag is preserved in the `Unrecognized` variant instead of being
//! dropped, so a lenient read never loses data and a strict read can report it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Type-safe identifier for the user owning an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Raised by the strict `FromStr` parsers when the text is not a known tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} tag: {value:?}")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

/// Where an order is in its fulfilment lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    /// Stored text that is not one of the tags above. Never holds a known tag;
    /// build it with `from_stored` so known text maps to its variant.
    Unrecognized(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Lenient conversion used when reading storage: never fails.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        raw.parse().unwrap_or(Self::Unrecognized(raw))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownTag {
                kind: "order status",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement state of an order's payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
    /// Stored text that is not one of the tags above. Never holds a known tag;
    /// build it with `from_stored` so known text maps to its variant.
    Unrecognized(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Lenient conversion used when reading storage: never fails.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        raw.parse().unwrap_or(Self::Unrecognized(raw))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            other => Err(UnknownTag {
                kind: "payment status",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer order.
///
/// `id` never changes once the order is persisted, and `updated_at` is never
/// earlier than `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a pending, unpaid order stamped with `now`.
    pub fn new(id: OrderId, user_id: UserId, total_amount: f64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            total_amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a modification at `now`. A clock that went backwards cannot move
    /// `updated_at` before `created_at` or before its previous value.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_known_tags_parse_both_ways() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status.clone()));
        }
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>(), Ok(status.clone()));
        }
    }

    #[test]
    fn test_unknown_tag_is_kept_by_lenient_read() {
        let status = OrderStatus::from_stored("SHIPPED");
        assert_eq!(status, OrderStatus::Unrecognized("SHIPPED".to_string()));
        assert!(!status.is_recognized());
        assert_eq!(status.as_str(), "SHIPPED");
        assert_eq!(OrderStatus::from_stored("shipped"), OrderStatus::Shipped);
        assert_eq!(PaymentStatus::from_stored("paid"), PaymentStatus::Paid);

        let err = "chargeback".parse::<PaymentStatus>().unwrap_err();
        assert_eq!(err.kind, "payment status");
        assert_eq!(err.to_string(), "unknown payment status tag: \"chargeback\"");
    }

    #[test]
    fn test_touch_never_rewinds() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut order = Order::new(OrderId(1), UserId(9), 10.0, created);

        order.touch(created + Duration::minutes(5));
        assert_eq!(order.updated_at, created + Duration::minutes(5));

        order.touch(created - Duration::hours(1));
        assert_eq!(order.updated_at, created + Duration::minutes(5));
        assert!(order.updated_at >= order.created_at);
    }
}
