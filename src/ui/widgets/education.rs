// src/ui/widgets/education.rs

use crate::app::App;
use crate::core::classifier::scan_url;
use crate::core::knowledge_base::{EXAMPLE_URLS, PROTECTION_CHECKLIST, SECURITY_TIPS, STAY_PROTECTED};
use crate::core::models::RiskStatus;
use crate::ui::widgets::report::status_color;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

fn tips_text() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Essential Security Tips".bold().underlined()), Line::from("")];
    for tip in SECURITY_TIPS {
        lines.push(Line::from(tip.title.bold()));
        lines.push(Line::from(Span::styled(tip.description, Style::default().fg(Color::Gray))));
        lines.push(Line::from(""));
    }
    lines
}

fn examples_text() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("URL Examples".bold().underlined()), Line::from("")];
    for example in EXAMPLE_URLS {
        let (icon, label) = match example.label {
            RiskStatus::Safe => ("✓", "Safe"),
            _ => ("✗", "Dangerous"),
        };
        let color = status_color(example.label);
        let mut header = vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(example.url, Style::default().fg(Color::White).bg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(label, Style::new().bold().fg(color)),
        ];
        // The teaching label and the heuristic do not always agree.
        if let Ok(result) = scan_url(example.url) {
            if result.status != example.label {
                header.push(Span::styled(
                    format!(" (scanner: {})", result.status),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(example.reason, Style::default().fg(Color::Gray))));
        lines.push(Line::from(""));
    }
    lines
}

/// Renders the Learn page: tips on the left, examples on the right, and the
/// "Stay Protected" box underneath.
pub fn render_education(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Learn to Identify Phishing Attempts (scroll with ↑ ↓)");
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(inner_area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let tips = tips_text();
    let examples = examples_text();
    let content_length = tips.len().max(examples.len());
    app.learn_content_length = content_length;
    app.learn_scroll_state = app.learn_scroll_state.content_length(content_length);
    let offset = u16::try_from(app.scroll_offset).unwrap_or(u16::MAX);

    let padded = |area: Rect| area.inner(Margin { horizontal: 1, vertical: 0 });
    frame.render_widget(
        Paragraph::new(tips).wrap(Wrap { trim: true }).scroll((offset, 0)),
        padded(columns[0]),
    );
    frame.render_widget(
        Paragraph::new(examples).wrap(Wrap { trim: true }).scroll((offset, 0)),
        padded(columns[1]),
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rows[0],
        &mut app.learn_scroll_state,
    );

    let checklist: Vec<Span> = PROTECTION_CHECKLIST
        .iter()
        .flat_map(|item| {
            [
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::raw(format!("{}   ", item)),
            ]
        })
        .collect();
    let protected = Paragraph::new(vec![
        Line::from(STAY_PROTECTED),
        Line::from(""),
        Line::from(checklist),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Stay Protected"),
    );
    frame.render_widget(protected, rows[1]);
}
