//! Page requests and page-count arithmetic.

use crate::model::ViewError;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-based page request.
///
/// Fields are plain data; [`Page::validate`] (called by `compute_view`) enforces
/// `number >= 1` and `size >= 1`. A `number` past the last page is not an error: it is
/// clamped to the last page when the view is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    /// 1-based page index.
    pub number: usize,
    /// Rows per page.
    pub size: usize,
}

impl Page {
    /// Page `number` of `size` rows.
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// First page of `size` rows.
    pub fn first(size: usize) -> Self {
        Self::new(1, size)
    }

    /// Check the caller contract.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] for a zero size or a zero page number.
    pub fn validate(&self) -> Result<(), ViewError> {
        if self.size == 0 {
            return Err(ViewError::invalid("page size", "must be at least 1, got 0"));
        }
        if self.number == 0 {
            return Err(ViewError::invalid("page number", "pages are 1-based, got 0"));
        }
        Ok(())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// `max(1, ceil(total_items / size))`. `size` must be non-zero.
pub fn total_pages(total_items: usize, size: usize) -> usize {
    debug_assert!(size > 0, "page size must be validated before use");
    total_items.div_ceil(size).max(1)
}
