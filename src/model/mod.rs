//! Domain model types (pure).
//!
//! All types in this module are pure data; nothing here touches the terminal or disk.

pub mod error;
pub mod key_action;
pub mod order;
pub mod record;
pub mod user;

// Re-export for convenience
pub use error::{AppError, InputError, ViewError};
pub use key_action::KeyAction;
pub use order::{Order, OrderField, OrderStatus, ServiceType};
pub use record::{FieldKind, FieldSet, FieldValue, Record, Scalar};
pub use user::{User, UserField, UserRole, UserStatus};
