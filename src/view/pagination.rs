//! Pagination footer: row range on the left, page markers on the right.

use super::styles::TableStyles;
use crate::view_state::{page_window, PageMarker};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::warn;

/// Footer for one page of results.
pub struct PaginationFooter {
    row_range: Option<(usize, usize)>,
    total_filtered: usize,
    total_records: usize,
    current: usize,
    total_pages: usize,
    max_visible: usize,
    styles: TableStyles,
}

impl PaginationFooter {
    /// Footer for page `current` of `total_pages`.
    ///
    /// `row_range` is the 1-based inclusive range of rows shown, `None` for an empty page.
    pub fn new(
        row_range: Option<(usize, usize)>,
        total_filtered: usize,
        current: usize,
        total_pages: usize,
        max_visible: usize,
    ) -> Self {
        Self {
            row_range,
            total_filtered,
            total_records: total_filtered,
            current,
            total_pages,
            max_visible,
            styles: TableStyles::default(),
        }
    }

    /// Size of the unfiltered collection, shown when filters hide some rows.
    pub fn total_records(mut self, total: usize) -> Self {
        self.total_records = total;
        self
    }

    /// Override styles.
    pub fn styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    /// "Showing a–b of n" text.
    pub fn summary_text(&self) -> String {
        let mut text = match self.row_range {
            Some((first, last)) => format!("Showing {first}–{last} of {}", self.total_filtered),
            None => format!("Showing 0 of {}", self.total_filtered),
        };
        if self.total_records != self.total_filtered {
            text.push_str(&format!(" (filtered from {})", self.total_records));
        }
        text
    }

    fn marker_spans(&self) -> Vec<Span<'static>> {
        let markers = match page_window(self.current, self.total_pages, self.max_visible) {
            Ok(markers) => markers,
            Err(e) => {
                warn!(error = %e, "Skipping page markers");
                return Vec::new();
            }
        };

        let mut spans = Vec::with_capacity(markers.len() * 2 + 2);
        spans.push(Span::styled("‹ ", self.styles.page_marker));
        for marker in markers {
            let style = match marker {
                PageMarker::Page(n) if n == self.current => self.styles.current_page,
                _ => self.styles.page_marker,
            };
            spans.push(Span::styled(format!(" {marker} "), style));
        }
        spans.push(Span::styled(" ›", self.styles.page_marker));
        spans
    }
}

impl Widget for PaginationFooter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.summary_text())).render(area, buf);
        Paragraph::new(Line::from(self.marker_spans()))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
