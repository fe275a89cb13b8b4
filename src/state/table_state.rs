//! Caller-owned table state.
//!
//! `TableState` is the explicit state object the controls layer mutates (search box,
//! status dropdown, sortable headers, pager). The pure core reads it on every
//! recomputation; the only thing written back is the effective page after clamping.

use crate::model::{FieldSet, Record, Scalar, ViewError};
use crate::view_state::{
    compute_view, FilterSpec, FilterValue, Page, SortDirection, SortSpec, TextCollator, ViewPage,
    ViewQuery,
};
use tracing::debug;

/// Search, filter, sort and page for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<F> {
    query: ViewQuery<F>,
}

impl<F: FieldSet> TableState<F> {
    /// Fresh state: page 1, no filters, empty search over `search_fields`, source order.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] if `page_size` is zero.
    pub fn new(search_fields: impl Into<Vec<F>>, page_size: usize) -> Result<Self, ViewError> {
        let page = Page::first(page_size);
        page.validate()?;
        Ok(Self {
            query: ViewQuery::new(search_fields, page),
        })
    }

    /// Builder: start with `sort` applied.
    pub fn with_sort(mut self, sort: SortSpec<F>) -> Self {
        self.query.sort = Some(sort);
        self
    }

    /// The query handed to `compute_view`.
    pub fn query(&self) -> &ViewQuery<F> {
        &self.query
    }

    // ===== Search =====

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.query.search.term
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search.term = term.into();
    }

    /// Append a typed character.
    pub fn push_search_char(&mut self, ch: char) {
        self.query.search.term.push(ch);
    }

    /// Remove the last character, if any.
    pub fn pop_search_char(&mut self) {
        self.query.search.term.pop();
    }

    /// Empty the search term.
    pub fn clear_search(&mut self) {
        self.query.search.term.clear();
    }

    // ===== Filters =====

    /// Active filters.
    pub fn filters(&self) -> &FilterSpec<F> {
        &self.query.filters
    }

    /// Constrain `field`; [`FilterValue::All`] removes the constraint.
    pub fn set_filter(&mut self, field: F, value: FilterValue) {
        self.query.filters.set(field, value);
    }

    /// Remove any constraint on `field`.
    pub fn clear_filter(&mut self, field: F) {
        self.query.filters.clear(field);
    }

    /// Step `field` through `All → options[0] → … → options[n-1] → All`.
    ///
    /// A current value that is not among `options` resets to `All`. Returns the new value.
    pub fn cycle_filter(&mut self, field: F, options: &[&str]) -> FilterValue {
        let next = match self.query.filters.get(field) {
            FilterValue::All => options.first().map(|o| Scalar::from(*o)),
            FilterValue::Equals(current) => options
                .iter()
                .position(|o| Scalar::from(*o) == *current)
                .and_then(|i| options.get(i + 1))
                .map(|o| Scalar::from(*o)),
        };
        let value = next.map_or(FilterValue::All, FilterValue::Equals);
        self.query.filters.set(field, value.clone());
        value
    }

    // ===== Sort =====

    /// Current sort, if any.
    pub fn sort(&self) -> Option<SortSpec<F>> {
        self.query.sort
    }

    /// Header click: the sorted column flips direction, any other column sorts ascending.
    pub fn toggle_sort(&mut self, field: F) {
        self.query.sort = Some(match self.query.sort {
            Some(current) if current.field == field => SortSpec {
                field,
                direction: current.direction.toggled(),
            },
            _ => SortSpec::asc(field),
        });
    }

    /// Move the sort to the next sortable column (wrapping), ascending.
    pub fn cycle_sort_field(&mut self) {
        let sortable: Vec<F> = F::ALL.iter().copied().filter(|f| f.sortable()).collect();
        let Some(first) = sortable.first().copied() else {
            return;
        };
        let next = self
            .query
            .sort
            .and_then(|s| sortable.iter().position(|f| *f == s.field))
            .map_or(first, |i| sortable[(i + 1) % sortable.len()]);
        self.query.sort = Some(SortSpec::asc(next));
    }

    /// Flip the direction of the current sort. No-op when unsorted.
    pub fn reverse_sort(&mut self) {
        if let Some(sort) = self.query.sort.as_mut() {
            sort.direction = sort.direction.toggled();
        }
    }

    /// Set an explicit sort, or `None` for source order.
    pub fn set_sort(&mut self, sort: Option<SortSpec<F>>) {
        self.query.sort = sort;
    }

    // ===== Paging =====

    /// Requested page. After [`TableState::view`] this is always in range.
    pub fn page(&self) -> Page {
        self.query.page
    }

    /// Advance one page. Overshooting is clamped on the next [`TableState::view`].
    pub fn next_page(&mut self) {
        self.query.page.number = self.query.page.number.saturating_add(1);
    }

    /// Go back one page, stopping at page 1.
    pub fn prev_page(&mut self) {
        self.query.page.number = self.query.page.number.saturating_sub(1).max(1);
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) {
        self.query.page.number = 1;
    }

    /// Jump to `total_pages` (as reported by the last view).
    pub fn last_page(&mut self, total_pages: usize) {
        self.query.page.number = total_pages.max(1);
    }

    /// Jump to page `number`.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] for page 0.
    pub fn go_to_page(&mut self, number: usize) -> Result<(), ViewError> {
        Page::new(number, self.query.page.size).validate()?;
        self.query.page.number = number;
        Ok(())
    }

    /// Change rows per page, keeping the first row of the current page on screen.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] for a zero size.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), ViewError> {
        Page::new(1, size).validate()?;
        // Page numbers are unclamped until the next view, so this can exceed usize
        let first_row = (self.query.page.number - 1).saturating_mul(self.query.page.size);
        self.query.page = Page::new(first_row / size + 1, size);
        Ok(())
    }

    // ===== Recompute =====

    /// Compute the visible page and store the clamped page number back.
    ///
    /// # Errors
    ///
    /// Propagates [`compute_view`] errors; state is left untouched on error.
    pub fn view<'a, T: Record<Field = F>>(
        &mut self,
        items: &'a [T],
        collator: &TextCollator,
    ) -> Result<ViewPage<'a, T>, ViewError> {
        let view = compute_view(items, &self.query, collator)?;
        if view.effective_page != self.query.page.number {
            debug!(
                requested = self.query.page.number,
                effective = view.effective_page,
                total_pages = view.total_pages,
                "Clamped requested page"
            );
            self.query.page.number = view.effective_page;
        }
        Ok(view)
    }

    /// Direction indicator for `field`'s header, if it is the sorted column.
    pub fn sort_indicator(&self, field: F) -> Option<SortDirection> {
        self.query
            .sort
            .filter(|s| s.field == field)
            .map(|s| s.direction)
    }
}

#[cfg(test)]
#[path = "table_state_tests.rs"]
mod tests;
