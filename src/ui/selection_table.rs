use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Row, Table};
use std::collections::HashSet;
use std::path::Path;

use crate::core::offering::{CourseId, CourseOffering};
use crate::ui::course_table::{COLUMN_WIDTHS, course_row, header_row};

pub fn render_selection_summary(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    marked: usize,
    export_path: &Path,
) {
    let line = Line::from(vec![
        Span::styled("📋 Selected Courses", Style::default().bold()),
        Span::raw(format!("  {selected} total, {marked} marked  ")),
        Span::styled(
            format!("→ {}", export_path.display()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_selection_table(
    frame: &mut Frame,
    area: Rect,
    entries: &[CourseOffering],
    selected_index: usize,
    scroll_offset: usize,
    marked: &HashSet<CourseId>,
) {
    if entries.is_empty() {
        let info = Paragraph::new("No courses added yet.").style(Style::default().fg(Color::Blue));
        frame.render_widget(info, area);
        return;
    }

    let visible_height = (area.height as usize).saturating_sub(1);
    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, entry)| {
            let is_cursor = i == selected_index;
            let is_marked = marked.contains(&entry.id());
            let checkbox = if is_marked { "[x]" } else { "[ ]" };
            let cursor = if is_cursor { "❯" } else { " " };
            let row = course_row(format!("{cursor}{checkbox}"), entry, is_cursor);
            if is_marked && !is_cursor {
                row.style(Style::default().fg(Color::Red))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header_row(""))
        .column_spacing(1);
    frame.render_widget(table, area);
}
