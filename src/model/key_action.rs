//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Application
    /// Leave the console. Default: q
    Quit,

    // Pagination
    /// Show the next page. Default: l/→
    NextPage,
    /// Show the previous page. Default: h/←
    PrevPage,
    /// Jump to page 1. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Row selection
    /// Move the row cursor up within the page. Default: k/↑
    SelectPrev,
    /// Move the row cursor down within the page. Default: j/↓
    SelectNext,

    // Search
    /// Start typing a search term. Default: /
    StartSearch,
    /// Stop typing and keep the term. Default: Enter
    SubmitSearch,
    /// Clear the search term. Default: Esc
    CancelSearch,

    // Filter & sort
    /// Step the status filter through all → each status → all. Default: f
    CycleFilter,
    /// Move the sort to the next sortable column. Default: s
    CycleSort,
    /// Flip the sort direction. Default: r
    ReverseSort,

    // Record actions
    /// Block or unblock the selected user. Default: b
    ToggleBlock,
    /// Delete the selected user. Default: d
    Delete,
    /// Mark the selected order completed. Default: a
    ApproveOrder,
    /// Mark the selected order rejected. Default: x
    RejectOrder,
}
