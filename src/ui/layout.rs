// src/ui/layout.rs

use crate::app::Page;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas for one frame. Areas that the current page does not use are
/// left as `Rect::default()`.
pub struct AppLayout {
    pub header: Rect,
    pub hero: Rect,
    pub input: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub learn: Rect,
    pub log_panel: Rect,
    pub footer: Rect,
}

/// Splits the frame into header, body and footer, then lays out the body for
/// the active page. With `show_logs` the log panel takes the right third of
/// the body.
pub fn create_layout(frame_size: Rect, page: Page, show_logs: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame_size);

    let (body, log_panel) = if show_logs {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[1]);
        (chunks[0], chunks[1])
    } else {
        (main_chunks[1], Rect::default())
    };

    let mut layout = AppLayout {
        header: main_chunks[0],
        hero: Rect::default(),
        input: Rect::default(),
        report: Rect::default(),
        summary: Rect::default(),
        learn: Rect::default(),
        log_panel,
        footer: main_chunks[2],
    };

    match page {
        Page::Scanner => {
            let scanner_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(body);

            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(scanner_chunks[2]);

            layout.hero = scanner_chunks[0];
            layout.input = scanner_chunks[1];
            layout.report = content_chunks[0];
            layout.summary = content_chunks[1];
        }
        Page::Learn => layout.learn = body,
    }

    layout
}
