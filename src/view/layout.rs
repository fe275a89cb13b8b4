//! Table screen layout.
//!
//! Header bar, search bar, table, pagination footer and status line, stacked
//! vertically.

use super::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::{PaginationFooter, SearchBar, TableStyles, TableView};
use crate::model::{FieldSet, Record};
use crate::state::{AppState, InputMode, Table, TableState};
use crate::view_state::compute_view;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints shown in the header bar.
const KEY_HINTS: &str = "q quit  / search  ←/→ page  j/k row  f filter  s sort  r reverse  \
     b block  d delete  a approve  x reject";

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &TableStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let areas = ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        table: chunks[2],
        footer: chunks[3],
        status: chunks[4],
    };

    match state.table() {
        Table::Orders { orders, state: table } => {
            render_table_screen(frame, &areas, orders, table, state, styles, "Orders")
        }
        Table::Users {
            directory,
            state: table,
        } => render_table_screen(
            frame,
            &areas,
            directory.all(),
            table,
            state,
            styles,
            "Users",
        ),
    }

    render_status_bar(frame, areas.status, state, styles);
}

struct ScreenAreas {
    header: Rect,
    search: Rect,
    table: Rect,
    footer: Rect,
    status: Rect,
}

fn render_table_screen<T: Record>(
    frame: &mut Frame,
    areas: &ScreenAreas,
    items: &[T],
    table: &TableState<T::Field>,
    app: &AppState,
    styles: &TableStyles,
    title: &str,
) {
    let header = Line::from(vec![
        Span::styled(format!(" {title} "), styles.header),
        Span::styled(format!(" {KEY_HINTS}"), styles.muted),
    ]);
    frame.render_widget(Paragraph::new(header), areas.header);

    let filters: Vec<(&'static str, String)> = table
        .filters()
        .active()
        .map(|(field, value)| (field.label(), value.to_string()))
        .collect();
    frame.render_widget(
        SearchBar::new(table.search_term(), app.mode == InputMode::Search)
            .filters(filters)
            .styles(*styles),
        areas.search,
    );

    let view = match compute_view(items, table.query(), app.collator()) {
        Ok(view) => view,
        Err(e) => {
            frame.render_widget(Paragraph::new(format!("Cannot show table: {e}")), areas.table);
            return;
        }
    };

    let empty_message = format!("No {} found", title.to_lowercase());
    frame.render_widget(
        TableView::new(&view)
            .title(title)
            .sort(table.sort())
            .selected(app.selected())
            .empty_message(&empty_message)
            .styles(*styles),
        areas.table,
    );

    let max_visible = app.max_visible_for_width(areas.footer.width);
    frame.render_widget(
        PaginationFooter::new(
            view.row_range(),
            view.total_filtered,
            view.effective_page,
            view.total_pages,
            max_visible,
        )
        .total_records(items.len())
        .styles(*styles),
        areas.footer,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    let text = match (&state.status_message, state.selected_id()) {
        (Some(message), _) => message.clone(),
        (None, Some(id)) => format!("Selected: {id}"),
        (None, None) => String::new(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles.muted))),
        area,
    );
}
