//! The table view computation: filter, search, sort, paginate.

use super::filter::{FilterSpec, SearchSpec};
use super::page::{total_pages, Page};
use super::sort::{sort_records, SortSpec, TextCollator};
use crate::model::{Record, ViewError};

/// Everything that decides which rows are visible.
///
/// Owned by the caller and passed in on every recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery<F> {
    /// Equality constraints.
    pub filters: FilterSpec<F>,
    /// Search term and the fields it applies to.
    pub search: SearchSpec<F>,
    /// Display order. `None` keeps source order.
    pub sort: Option<SortSpec<F>>,
    /// Requested page.
    pub page: Page,
}

impl<F: Copy + Eq> ViewQuery<F> {
    /// No filters, empty search over `search_fields`, source order, `page`.
    pub fn new(search_fields: impl Into<Vec<F>>, page: Page) -> Self {
        Self {
            filters: FilterSpec::new(),
            search: SearchSpec::over(search_fields),
            sort: None,
            page,
        }
    }
}

/// One computed page of rows plus pagination metadata.
///
/// # Invariants
/// - `1 <= effective_page <= total_pages`
/// - `total_pages == max(1, ceil(total_filtered / page_size))`
/// - `visible.len() <= page_size`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPage<'a, T> {
    /// Rows on the effective page, in display order.
    pub visible: Vec<&'a T>,
    /// Rows passing filters and search, across all pages.
    pub total_filtered: usize,
    /// Page count for `total_filtered`.
    pub total_pages: usize,
    /// The page actually shown after clamping.
    pub effective_page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl<T> ViewPage<'_, T> {
    /// True when no row is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// 1-based inclusive row range shown, for "Showing a–b of n".
    ///
    /// `None` when nothing matched.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            return None;
        }
        let first = (self.effective_page - 1) * self.page_size + 1;
        Some((first, first + self.visible.len() - 1))
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.effective_page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.effective_page > 1
    }
}

/// Compute the visible page of `items` for `query`.
///
/// 1. Keep items passing every filter.
/// 2. Keep items whose search fields contain the term (case-insensitive).
/// 3. Stable-sort by the sort spec, if any.
/// 4. Count pages.
/// 5. Clamp the requested page to the last page.
/// 6. Slice out the page.
///
/// Pure: the same inputs always give the same page.
///
/// # Errors
///
/// [`ViewError::InvalidArgument`] for a zero page size or page number.
pub fn compute_view<'a, T: Record>(
    items: &'a [T],
    query: &ViewQuery<T::Field>,
    collator: &TextCollator,
) -> Result<ViewPage<'a, T>, ViewError> {
    query.page.validate()?;

    let matcher = query.search.matcher();
    let mut retained: Vec<&'a T> = items
        .iter()
        .filter(|item| query.filters.matches(*item))
        .filter(|item| matcher.matches(*item))
        .collect();

    if let Some(sort) = &query.sort {
        sort_records(&mut retained, sort, collator);
    }

    let size = query.page.size;
    let total_filtered = retained.len();
    let total_pages = total_pages(total_filtered, size);
    let effective_page = query.page.number.min(total_pages);

    let start = (effective_page - 1) * size;
    let end = (start + size).min(total_filtered);
    // Keep only the page window.
    retained.truncate(end);
    retained.drain(..start.min(end));

    Ok(ViewPage {
        visible: retained,
        total_filtered,
        total_pages,
        effective_page,
        page_size: size,
    })
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod tests;
