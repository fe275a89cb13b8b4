//! Record sources.
//!
//! This module provides the records behind each table:
//! - JSON file loading for orders and users
//! - The in-memory `UserDirectory` (sample accounts when no file is given)
//! - `Dataset` / `Records` to pick and hold one table's data

use crate::model::error::InputError;
use crate::model::Order;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod user_directory;

pub use file::{load_orders, load_records, load_users};
pub use user_directory::UserDirectory;

/// Which table the console shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Dataset {
    /// Service orders.
    #[default]
    Orders,
    /// Registered accounts.
    Users,
}

impl Dataset {
    /// Name shown in the title bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Users => "Users",
        }
    }
}

/// Loaded data for one table.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Records {
    /// Orders read from a file.
    Orders(Vec<Order>),
    /// Accounts, editable through the directory.
    Users(UserDirectory),
}

impl Records {
    /// Number of records loaded.
    pub fn len(&self) -> usize {
        match self {
            Self::Orders(orders) => orders.len(),
            Self::Users(dir) => dir.len(),
        }
    }

    /// True when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The dataset these records belong to.
    pub fn dataset(&self) -> Dataset {
        match self {
            Self::Orders(_) => Dataset::Orders,
            Self::Users(_) => Dataset::Users,
        }
    }
}

/// Load the records for `dataset`.
///
/// # Logic:
/// 1. If a file path is provided: read it as a JSON array of that dataset's records
/// 2. Users without a file: the sample directory
/// 3. Orders without a file: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::NoInput` for orders without a file.
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Malformed` if the file is not a JSON array of records.
/// Returns `InputError::Io` for I/O errors during reading.
pub fn load_dataset(dataset: Dataset, file: Option<PathBuf>) -> Result<Records, InputError> {
    match (dataset, file) {
        (Dataset::Orders, Some(path)) => Ok(Records::Orders(load_orders(path)?)),
        (Dataset::Orders, None) => Err(InputError::NoInput),
        (Dataset::Users, Some(path)) => {
            Ok(Records::Users(UserDirectory::from_users(load_users(path)?)))
        }
        (Dataset::Users, None) => {
            info!("No users file given, using sample accounts");
            Ok(Records::Users(UserDirectory::sample()))
        }
    }
}
