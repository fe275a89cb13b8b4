//! Search bar widget: search term plus active filter badges.

use super::styles::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the search term (with a cursor while typing) and the active filters.
pub struct SearchBar<'a> {
    term: &'a str,
    typing: bool,
    filters: Vec<(&'static str, String)>,
    styles: TableStyles,
}

impl<'a> SearchBar<'a> {
    /// Bar showing `term`; `typing` adds a cursor and highlights the border.
    pub fn new(term: &'a str, typing: bool) -> Self {
        Self {
            term,
            typing,
            filters: Vec::new(),
            styles: TableStyles::default(),
        }
    }

    /// Active filters as `(column label, value)` pairs.
    pub fn filters(mut self, filters: Vec<(&'static str, String)>) -> Self {
        self.filters = filters;
        self
    }

    /// Override styles.
    pub fn styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if self.term.is_empty() && !self.typing {
            spans.push(Span::styled("/ to search", self.styles.muted));
        } else {
            spans.push(Span::raw(self.term.to_string()));
        }

        if self.typing {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        for (label, value) in self.filters {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(" {label}: {value} "),
                self.styles.filter_badge,
            ));
        }

        let (title, border) = if self.typing {
            ("Search (Enter to apply, Esc to clear)", self.styles.search_active)
        } else {
            ("Search", Style::default())
        };

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .render(area, buf);
    }
}
