// src/ui/widgets/header.rs

use crate::app::{App, Page};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the brand on the left and the page tabs next to it.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" 🛡 PhishGuard ".bold().cyan()));

    let titles: Vec<Line> = Page::iter().map(|p| Line::from(p.to_string())).collect();
    let selected = Page::iter().position(|p| p == app.page).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .highlight_style(Style::new().bold().fg(Color::Yellow))
        .divider(" | ");

    frame.render_widget(tabs, area);
}
