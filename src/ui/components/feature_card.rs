use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::content::FeatureCard;

/// Bordered card with the badge folded into the title line.
pub fn feature_card(card: &FeatureCard, accent: Color) -> Paragraph<'_> {
    Paragraph::new(card.body.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title(format!(" {} [{}] ", card.title, card.badge)),
        )
}
