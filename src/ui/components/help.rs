use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    widgets::Paragraph,
};

/// Key hint line for the footer.
pub fn key_hints() -> Paragraph<'static> {
    Paragraph::new("←/→ sections   Enter or click the robot: open UnivAI   q: quit")
        .style(Style::default().dim())
        .alignment(Alignment::Center)
}
