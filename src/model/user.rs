//! Customer and staff accounts.

use super::record::{FieldKind, FieldSet, FieldValue, Record};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Permission level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular customer.
    User,
    /// Full access to the console.
    Admin,
    /// Can review orders but not change pricing.
    Moderator,
}

impl UserRole {
    /// Every role, in filter-cycle order.
    pub const ALL: [Self; 3] = [Self::User, Self::Admin, Self::Moderator];

    /// Wire and filter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }
}

/// Account standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Can sign in and order.
    Active,
    /// Locked out by an admin.
    Blocked,
    /// Registered but not yet verified.
    Pending,
}

impl UserStatus {
    /// Every status, in filter-cycle order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Blocked, Self::Pending];

    /// Wire and filter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
            Self::Pending => "pending",
        }
    }

    /// Status after pressing block/unblock on this account.
    pub fn toggled_block(self) -> Self {
        match self {
            Self::Blocked => Self::Active,
            Self::Active | Self::Pending => Self::Blocked,
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: String,
    /// Sign-in email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Permission level.
    pub role: UserRole,
    /// Account standing.
    pub status: UserStatus,
    /// Registration time, RFC 3339.
    pub joined_at: String,
    /// Last activity, RFC 3339.
    pub last_active: String,
    /// Number of orders placed.
    pub orders_count: u32,
    /// Lifetime spend, in USD.
    pub total_spent: f64,
}

/// Columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// Account identifier.
    Id,
    /// Display name.
    Name,
    /// Sign-in email.
    Email,
    /// Permission level.
    Role,
    /// Account standing.
    Status,
    /// Orders placed.
    OrdersCount,
    /// Lifetime spend.
    TotalSpent,
    /// Registration time.
    JoinedAt,
    /// Last activity.
    LastActive,
}

impl FieldSet for UserField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Role,
        Self::Status,
        Self::OrdersCount,
        Self::TotalSpent,
        Self::JoinedAt,
        Self::LastActive,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
            Self::OrdersCount => "orders_count",
            Self::TotalSpent => "total_spent",
            Self::JoinedAt => "joined_at",
            Self::LastActive => "last_active",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
            Self::OrdersCount => "Orders",
            Self::TotalSpent => "Spent",
            Self::JoinedAt => "Joined",
            Self::LastActive => "Last Active",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::OrdersCount | Self::TotalSpent => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Id => FieldValue::Text(&self.id),
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Role => FieldValue::Text(self.role.as_str()),
            UserField::Status => FieldValue::Text(self.status.as_str()),
            UserField::OrdersCount => FieldValue::Number(f64::from(self.orders_count)),
            UserField::TotalSpent => FieldValue::Number(self.total_spent),
            UserField::JoinedAt => FieldValue::Text(&self.joined_at),
            UserField::LastActive => FieldValue::Text(&self.last_active),
        }
    }

    fn display(&self, field: UserField) -> String {
        match field {
            UserField::TotalSpent => format!("${:.2}", self.total_spent),
            UserField::JoinedAt => short_timestamp(&self.joined_at),
            UserField::LastActive => short_timestamp(&self.last_active),
            _ => self.value(field).to_string(),
        }
    }
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`, or return it untouched.
fn short_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
