use crate::app::Tab;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_status_bar(frame: &mut Frame, area: Rect, tab: Tab) {
    let hints: &[(&str, &str)] = match tab {
        Tab::Search => &[
            (" ↑↓ ", "navigate  "),
            ("⏎ ", "add  "),
            ("←→ ", "tab  "),
            ("^S ", "export  "),
            ("⎋ ", "quit"),
        ],
        Tab::Selected => &[
            (" ↑↓ ", "navigate  "),
            ("␣ ", "mark  "),
            ("r ", "remove  "),
            ("s ", "export  "),
            ("i ", "import  "),
            ("c ", "clear  "),
            ("←→ ", "tab  "),
            ("⎋ ", "quit"),
        ],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().bold()),
                Span::raw(*label),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().dim()),
        area,
    );
}
