// src/ui/widgets/hero.rs

use crate::core::knowledge_base::{HERO_STATS, HERO_TAGLINE, HERO_TITLE};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub fn render_hero(frame: &mut Frame, area: Rect) {
    let mut stats = Vec::new();
    for (i, (value, label)) in HERO_STATS.iter().enumerate() {
        if i > 0 {
            stats.push(Span::styled("   ·   ", Style::default().fg(Color::DarkGray)));
        }
        stats.push(Span::styled(*value, Style::new().bold()));
        stats.push(Span::raw(format!(" {}", label)));
    }

    let text = Text::from(vec![
        Line::from(HERO_TITLE.bold().red()),
        Line::from(Span::styled(HERO_TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(stats),
    ]);

    let hero = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}
