use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::core::catalog::Catalog;
use crate::core::offering::{CourseOffering, DISPLAY_COLUMNS};
use crate::core::selection::Selection;

/// Widths for the leading marker column followed by `DISPLAY_COLUMNS`.
pub const COLUMN_WIDTHS: [Constraint; 12] = [
    Constraint::Length(4),  // cursor + marker
    Constraint::Length(10), // Course Code
    Constraint::Min(18),    // Title
    Constraint::Length(7),  // Section
    Constraint::Length(4),  // Day1
    Constraint::Length(13), // Time1
    Constraint::Length(4),  // Day2
    Constraint::Length(13), // Time2
    Constraint::Length(6),  // Room1
    Constraint::Length(6),  // Room2
    Constraint::Length(14), // Faculty Name
    Constraint::Length(6),  // Credit
];

pub fn header_row(first: &str) -> Row<'static> {
    let mut cells = vec![Cell::from(first.to_string())];
    cells.extend(DISPLAY_COLUMNS.iter().map(|c| Cell::from(*c)));
    Row::new(cells).style(Style::default().fg(Color::Cyan).bold())
}

/// A table row: the marker cell, then the display columns.
pub fn course_row<'a>(marker: String, offering: &'a CourseOffering, is_cursor: bool) -> Row<'a> {
    let mut cells = vec![Cell::from(marker)];
    cells.extend(offering.display_values().into_iter().map(Cell::from));
    let style = if is_cursor {
        Style::default().bold().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Row::new(cells).style(style)
}

#[allow(clippy::too_many_arguments)]
pub fn render_course_table(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    results: &[usize],
    selected_index: usize,
    scroll_offset: usize,
    selection: &Selection,
    query_is_blank: bool,
) {
    if query_is_blank {
        let hint = Paragraph::new("Type to search by course code or title.")
            .style(Style::default().dim());
        frame.render_widget(hint, area);
        return;
    }
    if results.is_empty() {
        let info = Paragraph::new("No courses found matching your search.")
            .style(Style::default().fg(Color::Blue));
        frame.render_widget(info, area);
        return;
    }

    let visible_height = (area.height as usize).saturating_sub(1);
    let mut rows: Vec<Row> = Vec::new();

    for (display_i, &row_i) in results
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
    {
        let Some(offering) = catalog.get(row_i) else {
            continue;
        };
        let is_cursor = display_i == selected_index;
        let is_added = selection.is_selected(&offering.id());

        let cursor = if is_cursor { "❯ " } else { "  " };
        let added = if is_added { "✓" } else { " " };
        rows.push(course_row(format!("{cursor}{added}"), offering, is_cursor));
    }

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header_row(""))
        .column_spacing(1);
    frame.render_widget(table, area);
}
