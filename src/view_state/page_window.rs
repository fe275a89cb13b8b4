//! Compact page-number lists for pagination controls.

use crate::model::ViewError;
use std::fmt;

/// Page links shown on narrow terminals.
pub const NARROW_MAX_VISIBLE_PAGES: usize = 3;

/// Page links shown otherwise.
pub const WIDE_MAX_VISIBLE_PAGES: usize = 5;

/// One slot in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A clickable 1-based page number.
    Page(usize),
    /// Placeholder for skipped pages.
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Page numbers to display around `current`, with ellipses for gaps.
///
/// When `total <= max_visible` every page is listed. Otherwise the first and last pages
/// are always shown, plus a run of `max(1, max_visible - 2)` consecutive pages centred on
/// `current`. The run slides instead of shrinking at either end, so the control keeps a
/// constant width while paging. An [`PageMarker::Ellipsis`] separates two shown numbers
/// whenever at least one page lies between them.
///
/// The first, current and last pages are always shown, so three numbers is the floor:
/// a `max_visible` of 1 or 2 gives the same window as 3.
///
/// ```
/// use adminview::view_state::{page_window, PageMarker::{Ellipsis, Page}};
///
/// let window = page_window(5, 10, 5).unwrap();
/// assert_eq!(window, vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
/// ```
///
/// # Errors
///
/// [`ViewError::InvalidArgument`] when `total == 0`, `max_visible == 0`, or `current`
/// lies outside `[1, total]`.
pub fn page_window(
    current: usize,
    total: usize,
    max_visible: usize,
) -> Result<Vec<PageMarker>, ViewError> {
    if total == 0 {
        return Err(ViewError::invalid(
            "total pages",
            "there is always at least one page",
        ));
    }
    if max_visible == 0 {
        return Err(ViewError::invalid(
            "max visible pages",
            "must be at least 1, got 0",
        ));
    }
    if current == 0 || current > total {
        return Err(ViewError::invalid(
            "current page",
            format!("{current} is outside [1, {total}]"),
        ));
    }

    if total <= max_visible {
        return Ok((1..=total).map(PageMarker::Page).collect());
    }

    // total > max_visible >= 1, so there are at least two pages.
    let interior_slots = total - 2;
    let span = max_visible.saturating_sub(2).max(1).min(interior_slots);

    let mut shown = Vec::with_capacity(span + 2);
    shown.push(1);
    if span > 0 {
        let lead = (span - 1) / 2;
        let start = current.saturating_sub(lead).clamp(2, total - span);
        shown.extend(start..start + span);
    }
    shown.push(total);

    let mut markers = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<usize> = None;
    for page in shown {
        if let Some(prev) = previous {
            if page - prev >= 2 {
                markers.push(PageMarker::Ellipsis);
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    Ok(markers)
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    #[test]
    fn lists_every_page_when_they_fit() {
        assert_eq!(
            page_window(2, 4, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        assert_eq!(page_window(1, 1, 5).unwrap(), vec![Page(1)]);
        assert_eq!(
            page_window(3, 5, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn first_page_slides_window_right() {
        assert_eq!(
            page_window(1, 10, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(2, 10, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_slides_window_left() {
        assert_eq!(
            page_window(10, 10, 5).unwrap(),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(9, 10, 5).unwrap(),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_page_has_neighbours_and_two_ellipses() {
        assert_eq!(
            page_window(5, 10, 5).unwrap(),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn no_ellipsis_when_window_touches_boundary() {
        assert_eq!(
            page_window(3, 10, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(3, 6, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
    }

    #[test]
    fn narrow_window_shows_only_current_between_boundaries() {
        assert_eq!(
            page_window(5, 10, 3).unwrap(),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(1, 10, 3).unwrap(),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(10, 10, 3).unwrap(),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn budget_below_three_still_shows_first_current_and_last() {
        for max_visible in [1, 2] {
            assert_eq!(
                page_window(5, 10, max_visible).unwrap(),
                page_window(5, 10, 3).unwrap(),
                "max_visible = {max_visible}"
            );
        }
        assert_eq!(
            page_window(5, 10, 2).unwrap(),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(1, 10, 1).unwrap(),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn two_pages_with_tiny_budget_still_shows_both() {
        assert_eq!(page_window(1, 2, 1).unwrap(), vec![Page(1), Page(2)]);
    }

    #[test]
    fn rejects_zero_total() {
        assert!(matches!(
            page_window(1, 0, 5),
            Err(ViewError::InvalidArgument {
                argument: "total pages",
                ..
            })
        ));
    }

    #[test]
    fn rejects_current_out_of_range() {
        assert!(page_window(0, 10, 5).is_err());
        assert!(page_window(11, 10, 5).is_err());
    }

    #[test]
    fn rejects_zero_budget() {
        assert!(page_window(1, 10, 0).is_err());
    }

    #[test]
    fn marker_display() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "…");
    }
}
