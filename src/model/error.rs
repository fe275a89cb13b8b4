//! Error types for the adminview application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions so the shell can bubble everything up to a single [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Record file reading failures (file not found, malformed JSON, IO)
//!   - [`ViewError`] - Contract violations when computing a table view
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! View errors are caller bugs: a zero page size, page zero, or a page index outside
//! `[1, total]` when asking for a page window. The shell never retries them; it logs the
//! rejection and keeps the previous state. Input and terminal errors are fatal.
//!
//! Empty collections, searches that match nothing and pages past the end are **not**
//! errors. Requested pages past the end are clamped to the last page.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use adminview::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _orders = read_orders()?;
///     Ok(())
/// }
/// # fn read_orders() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load records from the input file.
    ///
    /// **Recovery**: Display error to user and exit. The console has nothing to show.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A view computation rejected its arguments.
    ///
    /// **Recovery**: Keep the previous table state and log the rejection.
    #[error("Invalid view request: {0}")]
    View(#[from] ViewError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading records from a JSON file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified record file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use adminview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// The file exists but is not a JSON array of the expected record shape.
    #[error("Malformed records in {path}: {reason}")]
    Malformed {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser message, including line and column.
        reason: String,
    },

    /// The orders table needs a file; there is no built-in order fixture.
    #[error("No input source: the orders table requires a JSON file")]
    NoInput,

    /// Generic I/O failure (permissions, disk errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the pure view-state core.
///
/// Every variant is a caller contract violation. The core never returns an error for
/// data-dependent outcomes such as an empty collection or a search with no hits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// An argument was outside its valid domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use adminview::model::error::ViewError;
    ///
    /// let err = ViewError::invalid("page size", "must be at least 1, got 0");
    /// assert_eq!(err.to_string(), "Invalid page size: must be at least 1, got 0");
    /// ```
    #[error("Invalid {argument}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The collation locale could not be parsed or has no collation data.
    #[error("Unsupported collation locale '{locale}': {reason}")]
    Collation {
        /// The locale identifier as configured.
        locale: String,
        /// Underlying ICU error message.
        reason: String,
    },
}

impl ViewError {
    /// Shorthand for [`ViewError::InvalidArgument`].
    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
