use ratatui::style::{Color, Style, Stylize};

/// UnivAI's amber/orange palette, flattened to terminal colors.
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const ORANGE: Color = Color::Rgb(249, 115, 22);
pub const GOLD: Color = Color::Rgb(251, 191, 36);
/// The robot's eye color.
pub const SKY: Color = Color::Rgb(147, 197, 253);

pub fn tab_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(AMBER).bold()
    } else {
        Style::default().fg(Color::Gray).dim()
    }
}

/// Accent color for the n-th card in a grid.
pub fn card_accent(index: usize) -> Color {
    const ACCENTS: [Color; 4] = [AMBER, ORANGE, GOLD, Color::Green];
    ACCENTS[index % ACCENTS.len()]
}
