//! Application state and transitions.
//!
//! `AppState` owns the loaded records, the per-table [`TableState`], the row cursor and
//! the search-typing mode. Key actions are plain method calls; nothing here touches the
//! terminal, so every transition is testable without a TUI.

use crate::config::ResolvedConfig;
use crate::model::{
    KeyAction, Order, OrderField, OrderStatus, Record, User, UserField, UserStatus, ViewError,
};
use crate::source::{Records, UserDirectory};
use crate::state::{StartupQuery, TableState};
use crate::view_state::{SortSpec, TextCollator};
use tracing::{debug, info, warn};

// ===== Table =====

/// One table's records together with its controls.
///
/// Sum type enforces that the state's column set matches the records.
#[derive(Debug, Clone)]
pub enum Table {
    /// Orders with their table state.
    Orders {
        /// Loaded orders, in file order.
        orders: Vec<Order>,
        /// Search, filter, sort and page.
        state: TableState<OrderField>,
    },
    /// Accounts with their table state.
    Users {
        /// Editable account store.
        directory: UserDirectory,
        /// Search, filter, sort and page.
        state: TableState<UserField>,
    },
}

impl Table {
    /// Wrap `records` with fresh table state for `page_size` rows per page.
    ///
    /// Orders start in file order; users start most recently active first.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] if `page_size` is zero.
    pub fn new(records: Records, page_size: usize) -> Result<Self, ViewError> {
        Ok(match records {
            Records::Orders(orders) => Table::Orders {
                orders,
                state: TableState::new(vec![OrderField::Id, OrderField::Username], page_size)?,
            },
            Records::Users(directory) => Table::Users {
                directory,
                state: TableState::new(vec![UserField::Name, UserField::Email], page_size)?
                    .with_sort(SortSpec::desc(UserField::LastActive)),
            },
        })
    }

    /// Labels the status filter cycles through.
    pub fn status_options(&self) -> Vec<&'static str> {
        match self {
            Table::Orders { .. } => OrderStatus::ALL.iter().map(|s| s.as_str()).collect(),
            Table::Users { .. } => UserStatus::ALL.iter().map(|s| s.as_str()).collect(),
        }
    }
}

// ===== InputMode =====

/// Whether keystrokes navigate the table or edit the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys map through the key bindings.
    #[default]
    Browse,
    /// Printable keys go into the search term.
    Search,
}

// ===== PageSummary =====

/// What the last recomputation produced, kept for navigation decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    /// Records that passed filter and search.
    pub total_filtered: usize,
    /// Page count for `total_filtered`.
    pub total_pages: usize,
    /// Page actually shown.
    pub effective_page: usize,
    /// Ids of the visible rows, top to bottom.
    pub row_ids: Vec<String>,
}

impl PageSummary {
    fn from_view<T: Record>(view: &crate::view_state::ViewPage<'_, T>) -> Self {
        Self {
            total_filtered: view.total_filtered,
            total_pages: view.total_pages,
            effective_page: view.effective_page,
            row_ids: view.visible.iter().map(|r| r.id().to_string()).collect(),
        }
    }
}

// ===== AppState =====

/// Application state. No I/O, no terminal.
#[derive(Debug)]
pub struct AppState {
    table: Table,
    collator: TextCollator,
    max_visible_pages: usize,
    narrow_max_visible_pages: usize,
    narrow_width: u16,
    selected: usize,
    summary: PageSummary,

    /// Current keyboard mode.
    pub mode: InputMode,
    /// Set by [`KeyAction::Quit`]; the event loop exits when true.
    pub should_quit: bool,
    /// One-line feedback for the last record action.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build state for `records` using the resolved configuration.
    ///
    /// # Errors
    ///
    /// [`ViewError`] if the page size is zero or the collation locale is unusable.
    pub fn new(records: Records, config: &ResolvedConfig) -> Result<Self, ViewError> {
        let collator = TextCollator::new(&config.collation_locale)?;
        let mut state = Self {
            table: Table::new(records, config.page_size)?,
            collator,
            max_visible_pages: config.max_visible_pages,
            narrow_max_visible_pages: config.narrow_max_visible_pages,
            narrow_width: config.narrow_width,
            selected: 0,
            summary: PageSummary::default(),
            mode: InputMode::Browse,
            should_quit: false,
            status_message: None,
        };
        state.refresh()?;
        Ok(state)
    }

    /// Apply a command-line query, then recompute.
    ///
    /// # Errors
    ///
    /// See [`StartupQuery::apply_to`].
    pub fn apply_startup(&mut self, query: &StartupQuery) -> Result<(), ViewError> {
        match &mut self.table {
            Table::Orders { state, .. } => query.apply_to(state)?,
            Table::Users { state, .. } => query.apply_to(state)?,
        }
        self.refresh()
    }

    /// The records and controls.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Collator used for text columns.
    pub fn collator(&self) -> &TextCollator {
        &self.collator
    }

    /// Row cursor within the visible page (0-based).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Result of the last recomputation.
    pub fn summary(&self) -> &PageSummary {
        &self.summary
    }

    /// Id of the record under the cursor, if the page has rows.
    pub fn selected_id(&self) -> Option<&str> {
        self.summary.row_ids.get(self.selected).map(String::as_str)
    }

    /// Pager marker budget for a terminal `width` columns wide.
    pub fn max_visible_for_width(&self, width: u16) -> usize {
        if width < self.narrow_width {
            self.narrow_max_visible_pages
        } else {
            self.max_visible_pages
        }
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        match &self.table {
            Table::Orders { state, .. } => state.search_term(),
            Table::Users { state, .. } => state.search_term(),
        }
    }

    /// Recompute the visible page and store what navigation needs.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewError`] from the view computation.
    pub fn refresh(&mut self) -> Result<(), ViewError> {
        self.summary = match &mut self.table {
            Table::Orders { orders, state } => {
                PageSummary::from_view(&state.view(orders.as_slice(), &self.collator)?)
            }
            Table::Users { directory, state } => {
                PageSummary::from_view(&state.view(directory.all(), &self.collator)?)
            }
        };
        self.selected = self
            .selected
            .min(self.summary.row_ids.len().saturating_sub(1));
        debug!(
            total_filtered = self.summary.total_filtered,
            page = self.summary.effective_page,
            total_pages = self.summary.total_pages,
            "Recomputed view"
        );
        Ok(())
    }

    /// Apply a bound key action and recompute.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewError`] from the view computation.
    pub fn handle_action(&mut self, action: KeyAction) -> Result<(), ViewError> {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                return Ok(());
            }
            KeyAction::SelectNext => {
                if self.selected + 1 < self.summary.row_ids.len() {
                    self.selected += 1;
                }
                return Ok(());
            }
            KeyAction::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                return Ok(());
            }
            KeyAction::StartSearch => {
                self.mode = InputMode::Search;
                return Ok(());
            }
            KeyAction::SubmitSearch => {
                self.mode = InputMode::Browse;
                return Ok(());
            }
            KeyAction::CancelSearch => {
                self.mode = InputMode::Browse;
                self.with_controls(|c| c.clear_search());
            }
            KeyAction::NextPage => self.change_page(|c, _| c.next_page()),
            KeyAction::PrevPage => self.change_page(|c, _| c.prev_page()),
            KeyAction::FirstPage => self.change_page(|c, _| c.first_page()),
            KeyAction::LastPage => self.change_page(|c, total| c.last_page(total)),
            KeyAction::CycleFilter => {
                let options = self.table.status_options();
                match &mut self.table {
                    Table::Orders { state, .. } => {
                        state.cycle_filter(OrderField::Status, &options);
                    }
                    Table::Users { state, .. } => {
                        state.cycle_filter(UserField::Status, &options);
                    }
                }
            }
            KeyAction::CycleSort => self.with_controls(|c| c.cycle_sort_field()),
            KeyAction::ReverseSort => self.with_controls(|c| c.reverse_sort()),
            KeyAction::ToggleBlock => self.toggle_block(),
            KeyAction::Delete => self.delete_selected(),
            KeyAction::ApproveOrder => self.set_order_status(OrderStatus::Completed),
            KeyAction::RejectOrder => self.set_order_status(OrderStatus::Rejected),
        }
        self.refresh()
    }

    /// Type a character into the search term (search mode only).
    ///
    /// # Errors
    ///
    /// Propagates [`ViewError`] from the view computation.
    pub fn push_search_char(&mut self, ch: char) -> Result<(), ViewError> {
        if self.mode != InputMode::Search {
            return Ok(());
        }
        self.with_controls(|c| c.push_search_char(ch));
        self.refresh()
    }

    /// Delete the last search character (search mode only).
    ///
    /// # Errors
    ///
    /// Propagates [`ViewError`] from the view computation.
    pub fn pop_search_char(&mut self) -> Result<(), ViewError> {
        if self.mode != InputMode::Search {
            return Ok(());
        }
        self.with_controls(|c| c.pop_search_char());
        self.refresh()
    }

    fn with_controls(&mut self, f: impl FnOnce(&mut dyn Controls)) {
        match &mut self.table {
            Table::Orders { state, .. } => f(state as &mut dyn Controls),
            Table::Users { state, .. } => f(state as &mut dyn Controls),
        }
    }

    fn change_page(&mut self, f: impl FnOnce(&mut dyn Controls, usize)) {
        let total = self.summary.total_pages;
        self.with_controls(|c| f(c, total));
        self.selected = 0;
    }

    fn toggle_block(&mut self) {
        let Some(id) = self.selected_id().map(str::to_string) else {
            return;
        };
        let Table::Users { directory, .. } = &mut self.table else {
            warn!("Block/unblock is only available for users");
            self.status_message = Some("Orders cannot be blocked".to_string());
            return;
        };
        let Some(next) = directory.get(&id).map(|u| u.status.toggled_block()) else {
            return;
        };
        self.status_message = directory.update_status(&id, next).map(|u: User| {
            format!("{} is now {}", u.name, u.status.as_str())
        });
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id().map(str::to_string) else {
            return;
        };
        let Table::Users { directory, .. } = &mut self.table else {
            warn!("Delete is only available for users");
            self.status_message = Some("Orders cannot be deleted".to_string());
            return;
        };
        if directory.delete(&id) {
            self.status_message = Some(format!("Deleted user {id}"));
        }
    }

    /// Approve (completed) or reject (rejected) the selected order.
    fn set_order_status(&mut self, status: OrderStatus) {
        let Some(id) = self.selected_id().map(str::to_string) else {
            return;
        };
        let Table::Orders { orders, .. } = &mut self.table else {
            warn!(status = status.as_str(), "Approve/reject is only available for orders");
            let verb = if status == OrderStatus::Completed {
                "approved"
            } else {
                "rejected"
            };
            self.status_message = Some(format!("Users cannot be {verb}"));
            return;
        };
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return;
        };
        order.status = status;
        info!(order = %id, status = status.as_str(), "Order status changed");
        self.status_message = Some(format!("Order {id} is now {}", status.as_str()));
    }
}

/// Column-independent controls, so key handling is written once for both tables.
trait Controls {
    fn clear_search(&mut self);
    fn push_search_char(&mut self, ch: char);
    fn pop_search_char(&mut self);
    fn next_page(&mut self);
    fn prev_page(&mut self);
    fn first_page(&mut self);
    fn last_page(&mut self, total_pages: usize);
    fn cycle_sort_field(&mut self);
    fn reverse_sort(&mut self);
}

impl<F: crate::model::FieldSet> Controls for TableState<F> {
    fn clear_search(&mut self) {
        TableState::clear_search(self);
    }
    fn push_search_char(&mut self, ch: char) {
        TableState::push_search_char(self, ch);
    }
    fn pop_search_char(&mut self) {
        TableState::pop_search_char(self);
    }
    fn next_page(&mut self) {
        TableState::next_page(self);
    }
    fn prev_page(&mut self) {
        TableState::prev_page(self);
    }
    fn first_page(&mut self) {
        TableState::first_page(self);
    }
    fn last_page(&mut self, total_pages: usize) {
        TableState::last_page(self, total_pages);
    }
    fn cycle_sort_field(&mut self) {
        TableState::cycle_sort_field(self);
    }
    fn reverse_sort(&mut self) {
        TableState::reverse_sort(self);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
