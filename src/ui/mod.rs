// src/ui/mod.rs

use crate::app::{App, Page};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area(), app.page, app.show_logs);

    widgets::header::render_header(frame, app, layout.header);

    match app.page {
        Page::Scanner => {
            widgets::hero::render_hero(frame, layout.hero);
            widgets::input::render_input(frame, app, layout.input);
            widgets::report::render_report(frame, app, layout.report);
            widgets::summary::render_summary(frame, app, layout.summary);
        }
        Page::Learn => widgets::education::render_education(frame, app, layout.learn),
    }

    if app.show_logs {
        widgets::log_view::render_log_view(frame, app, layout.log_panel);
    }
    widgets::footer::render_footer(frame, app, layout.footer);

    // Drawn last so it sits on top of everything else.
    widgets::notification::render_notification(frame, app, frame.area());
}
