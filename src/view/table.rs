//! Table widget for one page of records.

use super::styles::TableStyles;
use crate::model::{FieldSet, Record};
use crate::view_state::{SortSpec, ViewPage};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Gap between columns.
const COLUMN_SPACING: u16 = 2;

/// Renders the visible rows of a [`ViewPage`] with a header and row cursor.
pub struct TableView<'v, 'a, T: Record> {
    view: &'v ViewPage<'a, T>,
    sort: Option<SortSpec<T::Field>>,
    selected: Option<usize>,
    title: &'v str,
    empty_message: &'v str,
    styles: TableStyles,
}

impl<'v, 'a, T: Record> TableView<'v, 'a, T> {
    /// Table over `view` with default styles and no cursor.
    pub fn new(view: &'v ViewPage<'a, T>) -> Self {
        Self {
            view,
            sort: None,
            selected: None,
            title: "",
            empty_message: "No records found",
            styles: TableStyles::default(),
        }
    }

    /// Mark the sorted column with ▲/▼.
    pub fn sort(mut self, sort: Option<SortSpec<T::Field>>) -> Self {
        self.sort = sort;
        self
    }

    /// Highlight row `index` of the page.
    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Border title.
    pub fn title(mut self, title: &'v str) -> Self {
        self.title = title;
        self
    }

    /// Text shown when the page has no rows.
    pub fn empty_message(mut self, message: &'v str) -> Self {
        self.empty_message = message;
        self
    }

    /// Override styles.
    pub fn styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    fn header_label(&self, field: T::Field) -> String {
        match self.sort {
            Some(spec) if spec.field == field => {
                format!("{} {}", field.label(), spec.direction.arrow())
            }
            _ => field.label().to_string(),
        }
    }
}

impl<T: Record> Widget for TableView<'_, '_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title);

        if self.view.is_empty() {
            Paragraph::new(Line::from(self.empty_message))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let fields = <T::Field as FieldSet>::ALL;
        let headers: Vec<String> = fields.iter().map(|f| self.header_label(*f)).collect();
        let cells: Vec<Vec<String>> = self
            .view
            .visible
            .iter()
            .map(|record| fields.iter().map(|f| record.display(*f)).collect())
            .collect();

        let widths: Vec<Constraint> = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest = cells
                    .iter()
                    .map(|row| row[col].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0);
                Constraint::Length(u16::try_from(widest).unwrap_or(u16::MAX))
            })
            .collect();

        let rows = cells.into_iter().map(|row| {
            Row::new(row.into_iter().map(|text| {
                let style = self.styles.badge(&text);
                Cell::from(text).style(style)
            }))
        });

        let table = Table::new(rows, widths)
            .header(Row::new(headers).style(self.styles.header))
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(self.styles.selected)
            .block(block);

        let mut cursor = ratatui::widgets::TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut cursor);
    }
}
