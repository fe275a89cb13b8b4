//! View-state layer - filtering, searching, sorting and pagination (pure)
//!
//! This module turns a record collection plus a caller-owned query into the page of
//! rows to display. Nothing here holds state between calls.
//!
//! # Module Structure
//!
//! - `filter`: FilterSpec / SearchSpec - equality constraints and substring search
//! - `sort`: SortSpec, SortDirection, TextCollator - locale-aware ordering
//! - `page`: Page - 1-based page request and page-count arithmetic
//! - `compute`: compute_view - the filter → search → sort → paginate pipeline
//! - `page_window`: page_window - page numbers with ellipses for pagination controls

pub mod compute;
pub mod filter;
pub mod page;
pub mod page_window;
pub mod sort;

pub use compute::{compute_view, ViewPage, ViewQuery};
pub use filter::{FilterSpec, FilterValue, SearchSpec};
pub use page::{total_pages, Page, DEFAULT_PAGE_SIZE};
pub use page_window::{
    page_window, PageMarker, NARROW_MAX_VISIBLE_PAGES, WIDE_MAX_VISIBLE_PAGES,
};
pub use sort::{
    compare_values, SortDirection, SortSpec, TextCollator, DEFAULT_COLLATION_LOCALE,
};
