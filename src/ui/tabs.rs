use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs as RatatuiTabs};

pub fn render_tabs(frame: &mut Frame, area: Rect, tab_labels: &[&str], active: usize) {
    let tabs = RatatuiTabs::new(tab_labels.to_vec())
        .select(active)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().dim()))
        .highlight_style(Style::default().fg(Color::Cyan).bold().underlined());
    frame.render_widget(tabs, area);
}
