// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use crate::ui::widgets::report::status_color;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    text::Line,
};

/// Colour band for a score: green from 80, yellow from 50, red below.
fn score_color(score: u8) -> Color {
    if score >= 80 {
        Color::Green
    } else if score >= 50 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Renders the score panel: the number, an animated gauge, the verdict and a
/// threat count. Empty until a scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Security Score");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Score
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Verdict
            Constraint::Min(0),    // Caution
        ])
        .split(area);

    let result = match (&app.state, &app.scan_result) {
        (AppState::Finished, Some(result)) => result,
        _ => return,
    };

    let score_text = Text::from(vec![
        Line::from("Overall Score".bold()),
        Line::from(format!("{}/100", result.score)).style(Style::default().fg(score_color(result.score))),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    let score_gauge = Gauge::default()
        .percent(app.displayed_score as u16)
        .label("")
        .style(Style::default().fg(score_color(app.displayed_score)));
    frame.render_widget(score_gauge, summary_chunks[1]);

    let verdict = Text::from(vec![
        Line::from(vec![
            Span::raw("Verdict: "),
            Span::styled(
                result.status.as_ref().to_uppercase(),
                Style::new().bold().fg(status_color(result.status)),
            ),
        ]),
        Line::from(vec![
            Span::raw("Threats: "),
            Span::styled(result.threats.len().to_string(), Style::default().fg(Color::Red)),
        ]),
    ]);
    frame.render_widget(Paragraph::new(verdict), summary_chunks[3]);

    let caution = Paragraph::new(vec![
        Line::from("Visit Website (Use Caution)".bold()),
        Line::from(result.url.as_str()),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(caution, summary_chunks[4]);
}
