// src/ui/widgets/footer.rs

use crate::app::{App, AppState, Page};
use crate::core::knowledge_base::COPYRIGHT;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer: available actions on the first line, copyright below.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.page, app.state) {
        (Page::Learn, _) => Line::from(vec![
            key("Tab"),
            Span::raw(" scanner, "),
            key("↑ ↓"),
            Span::raw(" scroll, "),
            key("Q"),
            Span::raw(" quit."),
        ]),
        (Page::Scanner, AppState::Scanning) => Line::from(vec![
            Span::raw("Analyzing URL security... "),
            key("Esc"),
            Span::raw(" to cancel."),
        ]),
        (Page::Scanner, AppState::Idle) => Line::from(vec![
            key("Enter"),
            Span::raw(" scan, "),
            key("Tab"),
            Span::raw(" learn, "),
            key("Ctrl+L"),
            Span::raw(" logs, "),
            key("Esc"),
            Span::raw(" quit."),
        ]),
        (Page::Scanner, AppState::Finished) => Line::from(vec![
            key("Enter"),
            Span::raw(" rescan, "),
            key("Ctrl+N"),
            Span::raw(" new, "),
            key("Ctrl+E"),
            Span::raw(" export, "),
            key("↑ ↓"),
            Span::raw(" threats, "),
            key("Esc"),
            Span::raw(" quit."),
        ]),
    };

    let lines = vec![
        hints,
        Line::from(Span::styled(COPYRIGHT, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
