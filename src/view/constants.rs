//! Layout dimension constants for TUI rendering.

/// Height of the title and key-hint bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search bar in lines (border + content).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the pagination footer in lines.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the status line in lines.
///
/// Shows the selected row id or the result of the last record action.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// How long the event loop waits for input before polling again.
pub const EVENT_POLL_INTERVAL_MS: u64 = 250;
