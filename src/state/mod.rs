//! Table state and transitions (no terminal I/O).
//!
//! - `table_state`: search, filter, sort and page for one table
//! - `startup`: command-line query resolved against a table's columns
//! - `app_state`: loaded records, row cursor, input mode and key action handling

pub mod app_state;
pub mod startup;
pub mod table_state;

pub use app_state::{AppState, InputMode, PageSummary, Table};
pub use startup::StartupQuery;
pub use table_state::TableState;
