use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::{App, Section};
use crate::ui::components::feature_card::feature_card;
use crate::ui::components::help::key_hints;
use crate::ui::style;

pub fn render_landing(app: &App, area: Rect, buf: &mut Buffer) {
    let header_constraints = Constraint::Length(3);
    let hero_constraints = Constraint::Length(9);
    let body_constraints = Constraint::Min(1);
    let footer_constraints = Constraint::Length(3);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            header_constraints,
            hero_constraints,
            body_constraints,
            footer_constraints,
        ])
        .split(area);

    render_header(app, main_layout[0], buf);
    render_hero(app, main_layout[1], buf);
    match app.section {
        Section::About => render_about(app, main_layout[2], buf),
        Section::Roadmap => render_roadmap(app, main_layout[2], buf),
        Section::Feedback => render_feedback(app, main_layout[2], buf),
    }
    render_footer(app, main_layout[3], buf);
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let mut tabs: Vec<Span> = Vec::new();
    for section in Section::ALL {
        tabs.push(Span::styled(
            format!("  {}  ", section.title()),
            style::tab_style(section == app.section),
        ));
    }
    Paragraph::new(Line::from(tabs))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(style::AMBER))
                .title(" 🤖 UnivAI ")
                .title_alignment(Alignment::Left),
        )
        .render(area, buf);
}

fn render_hero(app: &App, area: Rect, buf: &mut Buffer) {
    let hero = &app.content.hero;
    let lines = vec![
        Line::from(hero.intro.as_str()),
        Line::default(),
        Line::from(hero.note.as_str()).style(Style::default().fg(style::GOLD).italic()),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", hero.title))
                .title_alignment(Alignment::Center),
        )
        .render(area, buf);
}

/// 2x2 grid of the project's limitation cards.
fn render_about(app: &App, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, card) in app.content.about.iter().take(4).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[i / 2]);
        feature_card(card, style::card_accent(i)).render(columns[i % 2], buf);
    }
}

fn render_roadmap(app: &App, area: Rect, buf: &mut Buffer) {
    let constraints: Vec<Constraint> = app
        .content
        .roadmap
        .iter()
        .map(|_| Constraint::Min(6))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, card) in app.content.roadmap.iter().enumerate() {
        feature_card(card, style::card_accent(i)).render(slots[i], buf);
    }
}

fn render_feedback(app: &App, area: Rect, buf: &mut Buffer) {
    let feedback = &app.content.feedback;
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    Paragraph::new(feedback.note.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(style::ORANGE))
                .title(format!(" {} ", feedback.note_title)),
        )
        .render(halves[0], buf);

    Paragraph::new(feedback.help_body.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(style::AMBER))
                .title(format!(" 👍 {} 👎 ", feedback.help_title)),
        )
        .render(halves[1], buf);
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = &app.content.footer;
    if area.height == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let status = footer.status.join("  •  ");
    Paragraph::new(format!("{}   [{}]", footer.tagline, status))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .render(rows[0], buf);
    key_hints().render(rows[1], buf);
}
