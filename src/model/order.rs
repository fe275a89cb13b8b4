//! Orders placed for Instagram growth services.

use super::record::{FieldKind, FieldSet, FieldValue, Record};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting fulfilment by the supplier.
    Pending,
    /// Delivered.
    Completed,
    /// Refused by the supplier or by an admin.
    Rejected,
}

impl OrderStatus {
    /// Every status, in filter-cycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Rejected];

    /// Wire and filter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

/// Kind of engagement purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// New followers on the target account.
    Followers,
    /// Likes on a post.
    Likes,
    /// Views on a reel or story.
    Views,
    /// Comments on a post.
    Comments,
}

impl ServiceType {
    /// Every service type, in filter-cycle order.
    pub const ALL: [Self; 4] = [Self::Followers, Self::Likes, Self::Views, Self::Comments];

    /// Wire and filter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Likes => "likes",
            Self::Views => "views",
            Self::Comments => "comments",
        }
    }
}

/// A single customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier, e.g. `ORD-4821`.
    pub id: String,
    /// Instagram handle the service is delivered to, without `@`.
    pub username: String,
    /// What was purchased.
    pub service_type: ServiceType,
    /// Units purchased.
    pub quantity: u32,
    /// Total charged, in USD.
    pub price: f64,
    /// Current status.
    pub status: OrderStatus,
    /// Order date as `YYYY-MM-DD`.
    pub date: String,
}

/// Columns of the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// Order identifier.
    Id,
    /// Customer handle.
    Username,
    /// Service purchased.
    ServiceType,
    /// Units purchased.
    Quantity,
    /// Total charged.
    Price,
    /// Lifecycle status.
    Status,
    /// Order date.
    Date,
}

impl FieldSet for OrderField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Username,
        Self::ServiceType,
        Self::Quantity,
        Self::Price,
        Self::Status,
        Self::Date,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
            Self::ServiceType => "service_type",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::Status => "status",
            Self::Date => "date",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "Order ID",
            Self::Username => "Username",
            Self::ServiceType => "Service Type",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
            Self::Status => "Status",
            Self::Date => "Date",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Quantity | Self::Price => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    // The orders header has no sort toggle on the username column.
    fn sortable(self) -> bool {
        self != Self::Username
    }
}

impl Record for Order {
    type Field = OrderField;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: OrderField) -> FieldValue<'_> {
        match field {
            OrderField::Id => FieldValue::Text(&self.id),
            OrderField::Username => FieldValue::Text(&self.username),
            OrderField::ServiceType => FieldValue::Text(self.service_type.as_str()),
            OrderField::Quantity => FieldValue::Number(f64::from(self.quantity)),
            OrderField::Price => FieldValue::Number(self.price),
            OrderField::Status => FieldValue::Text(self.status.as_str()),
            OrderField::Date => FieldValue::Text(&self.date),
        }
    }

    fn display(&self, field: OrderField) -> String {
        match field {
            OrderField::Username => format!("@{}", self.username),
            OrderField::Price => format!("${:.2}", self.price),
            _ => self.value(field).to_string(),
        }
    }
}
