// src/ui/widgets/notification.rs

use crate::app::{App, NotificationKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the current notification, if any, as a small box in the top-right
/// corner. `Clear` keeps the UI underneath from bleeding through.
pub fn render_notification(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = &app.notification else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let block = Block::default()
        .title(Line::from(notification.title.as_str().bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let popup = Paragraph::new(notification.message.as_str())
        .block(block)
        .wrap(Wrap { trim: true });

    let popup_area = top_right_rect(40, 4, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A rectangle `percent_x` wide and `height` rows tall, anchored to the
/// top-right corner of `r` just below the header.
fn top_right_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - percent_x),
            Constraint::Percentage(percent_x),
        ])
        .split(vertical[1])[1]
}
