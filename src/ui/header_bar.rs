use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::path::Path;

pub fn render_header_bar(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    catalog_source: Option<&Path>,
    catalog_len: usize,
    selected_len: usize,
    total_credits: f32,
) {
    let source_name = catalog_source
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Cyan).bold()),
        Span::styled("  ", Style::default()),
        Span::styled(source_name, Style::default().dim()),
        Span::styled(format!(" ({catalog_len} offerings)"), Style::default().dim()),
        Span::styled("  ", Style::default()),
        Span::styled(
            format!(
                "{selected_len} selected · {} cr",
                format_credits(total_credits)
            ),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn format_credits(credits: f32) -> String {
    if credits.fract() == 0.0 {
        format!("{credits:.0}")
    } else {
        format!("{credits:.1}")
    }
}
