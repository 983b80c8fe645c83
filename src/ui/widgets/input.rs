// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState};

/// Horizontal scroll and cursor column for `text_width` characters in a box
/// `inner_width` columns wide. The tail of the text stays visible with one
/// free column for the cursor.
fn input_scroll(text_width: usize, inner_width: u16) -> (u16, u16) {
    let visible = usize::from(inner_width.saturating_sub(1));
    let offset = text_width.saturating_sub(visible);
    let cursor = text_width - offset;
    (
        u16::try_from(offset).unwrap_or(u16::MAX),
        u16::try_from(cursor).unwrap_or(u16::MAX),
    )
}

/// Renders the input box widget.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.state {
        AppState::Scanning => "URL (Scanning...)",
        _ => "URL to scan",
    };
    let input_block = Block::default().borders(Borders::ALL).title(title);
    let (offset, cursor) = input_scroll(app.input.chars().count(), area.width.saturating_sub(2));

    let input_paragraph = if app.input.is_empty() && app.accepts_input() {
        Paragraph::new("https://example.com").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.input.as_str())
            .style(Style::default().fg(Color::Yellow))
            .scroll((0, offset))
    };
    frame.render_widget(input_paragraph.block(input_block), area);

    // Show the cursor only while typing is possible.
    if app.accepts_input() {
        frame.set_cursor_position((area.x + 1 + cursor, area.y + 1));
    }
}
