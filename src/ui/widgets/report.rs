// src/ui/widgets/report.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::knowledge_base;
use crate::core::models::{RiskStatus, ScanResult, Severity};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    text::Line,
};

pub fn status_color(status: RiskStatus) -> Color {
    match status {
        RiskStatus::Safe => Color::Green,
        RiskStatus::Suspicious => Color::Yellow,
        RiskStatus::Dangerous => Color::Red,
    }
}

fn status_icon(status: RiskStatus) -> &'static str {
    match status {
        RiskStatus::Safe => "✓",
        RiskStatus::Suspicious | RiskStatus::Dangerous => "⚠",
    }
}

pub fn render_report(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Security Status (threats with ↑ ↓)");

    let result = match (app.state, app.scan_result.clone()) {
        (AppState::Scanning, _) => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            let content = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw("Analyzing URL security..."),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(content.block(main_block), area);
            return;
        }
        (_, Some(result)) => result,
        (_, None) => {
            let content = Paragraph::new(vec![
                Line::from(""),
                Line::from("URL Security Scanner".bold()),
                Line::from("Enter any URL to check for phishing and malicious content."),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(content.block(main_block), area);
            return;
        }
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status line
            Constraint::Min(0),    // Threats
            Constraint::Length(7), // Domain details
        ])
        .split(inner_area);

    render_status_line(frame, &result, chunks[0]);
    render_threats(frame, app, &result, chunks[1]);
    render_domain_details(frame, &result, chunks[2]);
}

fn render_status_line(frame: &mut Frame, result: &ScanResult, area: Rect) {
    let color = status_color(result.status);
    let badge = format!(" {} ", result.status.as_ref().to_uppercase());
    let text = vec![
        Line::from(vec![
            Span::styled(format!("{} ", status_icon(result.status)), Style::default().fg(color)),
            Span::styled("Security Status  ", Style::new().bold()),
            Span::styled(badge, Style::new().bold().fg(Color::Black).bg(color)),
        ]),
        Line::from(Span::styled(result.url.as_str(), Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_threats(frame: &mut Frame, app: &mut App, result: &ScanResult, area: Rect) {
    if !result.has_threats() {
        let text = Text::from(vec![
            Line::from(""),
            Line::from("✓ NO THREATS DETECTED".bold().fg(Color::Green)),
            Line::from(""),
            Line::from("Nothing about this address matched a known phishing pattern."),
        ]);
        let p = Paragraph::new(text).alignment(Alignment::Center).block(Block::default().borders(Borders::TOP));
        frame.render_widget(p, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(result.threats.len() as u16 + 1), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = result
        .threats
        .iter()
        .map(|threat| {
            let style = match knowledge_base::threat_detail(threat).map(|d| d.severity) {
                Some(Severity::Critical) => Style::default().fg(Color::Red),
                Some(Severity::Warning) => Style::default().fg(Color::Yellow),
                None => Style::default().fg(Color::Cyan),
            };
            ListItem::new(Line::from(vec![Span::raw("• "), Span::styled(threat.as_str(), style)]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP).title("Security Threats Detected".red().bold()))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, chunks[0], &mut app.threat_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let detail = app
        .threat_list_state
        .selected()
        .and_then(|i| result.threats.get(i))
        .and_then(|t| knowledge_base::threat_detail(t));

    let text = match detail {
        Some(detail) => vec![
            Line::from("WHAT IT MEANS:".yellow().bold()),
            Line::from(detail.description),
            Line::from(""),
            Line::from("WHAT TO DO:".yellow().bold()),
            Line::from(detail.advice),
        ],
        None => vec![Line::from("Select a threat above to see details.")],
    };
    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
    frame.render_widget(p, chunks[1]);
}

fn render_domain_details(frame: &mut Frame, result: &ScanResult, area: Rect) {
    let details = &result.details;
    let rows = [
        ("Domain:", details.domain.as_str()),
        ("IP Address:", details.ip.as_str()),
        ("Country:", details.country.as_str()),
        ("Registrar:", details.registrar.as_str()),
        ("Created:", details.created.as_str()),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
                Span::raw(*value),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::TOP).title("Domain Details");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
