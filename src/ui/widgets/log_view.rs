// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Splits a log line into its "DATE TIME" prefix and the rest. Lines that do
/// not have at least three space-separated parts are returned whole.
fn split_timestamp(line: &str) -> Option<(String, String)> {
    let mut parts = line.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), Some(rest)) => {
            Some((format!("{} {}", date, time), format!(" {}", rest)))
        }
        _ => None,
    }
}

/// Renders the most recent log lines with a dimmed timestamp and a horizontal
/// scrollbar for long lines.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let max_width = app.log_content.iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    // Keep the newest lines in view.
    let visible = inner_area.height.saturating_sub(1) as usize;
    let skip = app.log_content.len().saturating_sub(visible);

    let log_lines: Vec<Line> = app.log_content.iter().skip(skip).map(|line_str| {
        match split_timestamp(line_str) {
            Some((timestamp, message)) => Line::from(vec![
                Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
                Span::raw(message),
            ]),
            None => Line::from(line_str.as_str()),
        }
    }).collect();

    let log_paragraph = Paragraph::new(log_lines)
        .scroll((0, app.log_horizontal_scroll as u16));
    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
        .thumb_symbol("■");
    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    frame.render_stateful_widget(
        scrollbar,
        scrollbar_area,
        &mut app.log_horizontal_scroll_state,
    );
}
