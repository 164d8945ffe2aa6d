use crate::round::Round;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub fn draw_finish(f: &mut Frame, round: &Round) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("🎉 Вітаємо!")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("Ви розклали всі картки по полицях."),
        Line::from(format!(
            "Ця гра зарахована: {} завдань виконано.",
            round.deck().len()
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    let curriculum = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .label(round.progress.round_label())
        .ratio(round.progress.round_fraction().clamp(0.0, 1.0) as f64)
        .block(Block::default().borders(Borders::ALL).title("Загальний поступ"));
    f.render_widget(curriculum, chunks[2]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Вийти"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
