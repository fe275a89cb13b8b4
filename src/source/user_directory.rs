//! In-memory account store.
//!
//! `UserDirectory` is the data-access collaborator for the users table. The view core
//! never talks to it; the shell reads `all()` and hands the slice to `compute_view`.

use crate::model::{User, UserRole, UserStatus};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use tracing::{info, warn};

/// Account records owned by the console.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Directory over an explicit list (e.g. loaded from a file).
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The five fixture accounts, timestamped relative to the current time.
    pub fn sample() -> Self {
        Self::sample_at(Utc::now())
    }

    /// The fixture accounts, timestamped relative to `now`.
    pub fn sample_at(now: DateTime<Utc>) -> Self {
        let ts = |ago: Duration| (now - ago).to_rfc3339_opts(SecondsFormat::Millis, true);
        let account = |id: &str,
                       email: &str,
                       name: &str,
                       role: UserRole,
                       status: UserStatus,
                       joined: Duration,
                       active: Duration,
                       orders_count: u32,
                       total_spent: f64| User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            status,
            joined_at: ts(joined),
            last_active: ts(active),
            orders_count,
            total_spent,
        };

        Self::from_users(vec![
            account(
                "1",
                "john.doe@example.com",
                "John Doe",
                UserRole::User,
                UserStatus::Active,
                Duration::days(30),
                Duration::days(2),
                5,
                120.50,
            ),
            account(
                "2",
                "jane.smith@example.com",
                "Jane Smith",
                UserRole::User,
                UserStatus::Active,
                Duration::days(15),
                Duration::hours(1),
                2,
                45.99,
            ),
            account(
                "3",
                "admin@example.com",
                "Admin User",
                UserRole::Admin,
                UserStatus::Active,
                Duration::days(60),
                Duration::zero(),
                0,
                0.0,
            ),
            account(
                "4",
                "blocked.user@example.com",
                "Blocked User",
                UserRole::User,
                UserStatus::Blocked,
                Duration::days(45),
                Duration::days(10),
                1,
                19.99,
            ),
            account(
                "5",
                "moderator@example.com",
                "Moderator User",
                UserRole::Moderator,
                UserStatus::Active,
                Duration::days(25),
                Duration::days(1),
                3,
                75.25,
            ),
        ])
    }

    /// Every account, in insertion order.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when there are no accounts.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up an account by id.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Set an account's status. Returns the updated account, or `None` for an unknown id.
    pub fn update_status(&mut self, id: &str, status: UserStatus) -> Option<User> {
        let Some(user) = self.users.iter_mut().find(|u| u.id == id) else {
            warn!(id, "Status update for unknown user");
            return None;
        };
        user.status = status;
        info!(id, status = status.as_str(), "Updated user status");
        Some(user.clone())
    }

    /// Remove an account. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() < before;
        if removed {
            info!(id, "Deleted user");
        } else {
            warn!(id, "Delete for unknown user");
        }
        removed
    }

    /// Accounts whose name or email contains `query`, ignoring case. An empty query
    /// returns everyone.
    pub fn search(&self, query: &str) -> Vec<&User> {
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
