use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use crate::companion::{Companion, Expression};
use crate::ui::style;

const WIDTH: u16 = 30;
const BUBBLE_HEIGHT: u16 = 3;
const ROBOT_HEIGHT: u16 = 6;

/// Overlay slot for the floating robot: hugging the right edge, vertically
/// centered, with headroom above the robot for the thought bubble.
pub fn companion_rect(area: Rect) -> Rect {
    let width = WIDTH.min(area.width);
    let height = (BUBBLE_HEIGHT + ROBOT_HEIGHT).min(area.height);
    let x = area.right().saturating_sub(width.saturating_add(1).min(area.width));
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the companion over whatever the page put underneath it. The
/// bubble row stays transparent while hidden so the page shows through.
pub fn render_companion(companion: &Companion, bubble_text: &str, area: Rect, buf: &mut Buffer) {
    if area.height <= BUBBLE_HEIGHT || area.width < 8 {
        return;
    }
    let bubble_area = Rect::new(area.x, area.y, area.width, BUBBLE_HEIGHT);
    let robot_area = Rect::new(
        area.x,
        area.y + BUBBLE_HEIGHT,
        area.width,
        area.height - BUBBLE_HEIGHT,
    );

    if companion.attention_visible() {
        Clear.render(bubble_area, buf);
        Paragraph::new(bubble_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(Color::White))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White)),
            )
            .render(bubble_area, buf);
    }

    Clear.render(robot_area, buf);
    let face = Line::from(eyes(companion.expression()))
        .style(Style::default().fg(style::SKY).bold());
    let body = vec![
        Line::from("▗▄▄▖").fg(style::GOLD),
        face,
        Line::from("▝▀▀▘").fg(style::GOLD),
    ];
    Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(style::GOLD))
                .title(" UnivAI 🤖 ")
                .title_alignment(Alignment::Center),
        )
        .render(robot_area, buf);
}

fn eyes(expression: Expression) -> &'static str {
    match expression {
        Expression::Neutral => "[ • • ]",
        Expression::Wink => "[ ─ • ]",
        Expression::Averted => "[  • •]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_hugs_right_edge() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = companion_rect(area);
        assert_eq!(rect.right(), 99);
        assert_eq!(rect.width, WIDTH);
        assert_eq!(rect.height, BUBBLE_HEIGHT + ROBOT_HEIGHT);
        // vertically centered
        assert_eq!(rect.y, (40 - rect.height) / 2);
    }

    #[test]
    fn rect_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = companion_rect(area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }
}
