use crate::app::{Notice, NoticeKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_notice_bar(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => Color::Blue,
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    };

    let paragraph = Paragraph::new(notice.text.as_str()).style(Style::default().fg(color));
    frame.render_widget(paragraph, area);
}
