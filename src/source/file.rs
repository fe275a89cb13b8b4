//! JSON record files.
//!
//! A record file is a single JSON array, in the same camelCase shape the dashboard's
//! services return.

use crate::model::error::InputError;
use crate::model::{Order, User};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Read a JSON array of records from `path`.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Malformed` if the content is not an array of `T`.
/// Returns `InputError::Io` for other I/O errors.
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, InputError> {
    let path = path.as_ref();

    // Check if file exists before trying to open
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let records: Vec<T> = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            InputError::Io(e.into())
        } else {
            InputError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })?;

    info!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Read an orders file.
///
/// # Errors
///
/// See [`load_records`].
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, InputError> {
    load_records(path)
}

/// Read a users file.
///
/// # Errors
///
/// See [`load_records`].
pub fn load_users(path: impl AsRef<Path>) -> Result<Vec<User>, InputError> {
    load_records(path)
}
