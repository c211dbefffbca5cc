use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_confirm_clear(frame: &mut Frame, area: Rect, count: usize) {
    // Calculate modal size (centered, 50% width, 7 rows)
    let modal_width = (area.width as f32 * 0.5) as u16;
    let modal_height = area.height.min(7);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x: area.x + modal_x,
        y: area.y + modal_y,
        width: modal_width,
        height: modal_height,
    };

    // Clear the background area
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Clear All Selected Courses ")
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(modal_area.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    }));

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("🗑️ Remove all {count} selected course(s)?"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(content, chunks[0]);

    let status =
        Paragraph::new("Enter: Clear  Esc: Cancel").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[1]);
}
